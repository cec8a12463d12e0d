#[cfg(test)]
mod tests {

    use ron;
    use rs_share_parser::*;

    #[test]
    fn game_result_serde() {
        let parser = ShareParser::default();
        let result = parser.parse_one("Wordle 1,234 3/6").unwrap();

        let ser = ron::to_string(&result);
        assert!(ser.is_ok());

        let deser = ron::from_str::<GameResult>(&ser.unwrap());
        assert!(deser.is_ok());
        assert_eq!(deser.unwrap(), result);
    }

    #[test]
    fn game_id_serializes_to_lowercase_tag() {
        let ser = ron::to_string(&GameId::Connections).unwrap();
        assert!(ser.contains("connections"));
    }

    #[test]
    fn game_meta_round_trips_every_variant() {
        let metas = vec![
            GameMeta::Wordle {
                guesses: Some(3),
                hard_mode: true,
            },
            GameMeta::Wordle {
                guesses: None,
                hard_mode: false,
            },
            GameMeta::Connections {
                mistakes: 1,
                perfect: false,
            },
            GameMeta::Strands {
                hints: 2,
                perfect: false,
            },
            GameMeta::Mini { seconds: 83 },
        ];

        for meta in metas {
            let ser = ron::to_string(&meta).unwrap();
            let deser = ron::from_str::<GameMeta>(&ser).unwrap();
            assert_eq!(deser, meta);
        }
    }

    #[test]
    fn parse_all_results_serde() {
        let parser = ShareParser::default();
        let results =
            parser.parse_all("Wordle 5 2/6\n\nConnections\nPuzzle #5\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪");
        assert_eq!(results.len(), 2);

        let ser = ron::to_string(&results).unwrap();
        let deser = ron::from_str::<Vec<GameResult>>(&ser).unwrap();
        assert_eq!(deser, results);
    }
}
