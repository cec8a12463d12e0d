#[macro_use]
extern crate assert_matches;

use rs_share_parser::*;

const WORDLE_BLOCK: &str = "Wordle 1,234 3/6";
const CONNECTIONS_BLOCK: &str = "Connections \nPuzzle #567\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪";

#[test]
fn parse_one_wordle_win() {
    let parser = ShareParser::default();
    let result = parser.parse_one(WORDLE_BLOCK).unwrap();

    assert_eq!(result.game_id, GameId::Wordle);
    assert_eq!(result.puzzle_number, Some(1234));
    assert_eq!(result.raw_score, "3/6");
    assert!(result.won);
    assert_eq!(result.numeric_score, 20);
}

#[test]
fn parse_one_wordle_loss() {
    let parser = ShareParser::default();
    let result = parser.parse_one("Wordle 1,234 X/6").unwrap();

    assert_eq!(result.raw_score, "X/6");
    assert!(!result.won);
    assert_eq!(result.numeric_score, 0);
}

#[test]
fn parse_one_connections_perfect() {
    let parser = ShareParser::default();
    let result = parser.parse_one(CONNECTIONS_BLOCK).unwrap();

    assert_eq!(result.game_id, GameId::Connections);
    assert_eq!(result.puzzle_number, Some(567));
    assert!(result.won);
    assert_eq!(
        result.meta,
        GameMeta::Connections {
            mistakes: 0,
            perfect: true
        }
    );
}

#[test]
fn parse_one_strands_perfect() {
    let parser = ShareParser::default();
    let result = parser.parse_one("Strands #123\n🟡🔵🔵\n🔵🔵🔵").unwrap();

    assert_eq!(result.game_id, GameId::Strands);
    assert_eq!(result.puzzle_number, Some(123));
    assert_eq!(result.numeric_score, 30);
    assert_eq!(
        result.meta,
        GameMeta::Strands {
            hints: 0,
            perfect: true
        }
    );
}

#[test]
fn parse_one_mini_in_prose() {
    let parser = ShareParser::default();
    let result = parser
        .parse_one("I solved the 1/17/2026 New York Times Mini Crossword in 1:23!")
        .unwrap();

    assert_eq!(result.game_id, GameId::Mini);
    assert_eq!(result.meta, GameMeta::Mini { seconds: 83 });
}

#[test]
fn parse_one_random_text_is_no_match() {
    let parser = ShareParser::default();

    assert_eq!(parser.parse_one("This is just random text"), None);
}

#[test]
fn first_match_wins_across_stacked_blocks() {
    let parser = ShareParser::default();
    let stacked = format!("{}\n\n{}", WORDLE_BLOCK, CONNECTIONS_BLOCK);

    let first = parser.parse_one(&stacked).unwrap();
    assert_eq!(first.game_id, GameId::Wordle);

    let all = parser.parse_all(&stacked);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].game_id, GameId::Wordle);
    assert_eq!(all[1].game_id, GameId::Connections);
}

#[test]
fn parse_all_returns_blocks_in_source_order() {
    let parser = ShareParser::default();
    let stacked = format!(
        "{}\n\nStrands #9\n🟡🔵🔵\n\n{}\n\nMini Crossword in 1:05",
        CONNECTIONS_BLOCK, WORDLE_BLOCK
    );

    let ids: Vec<GameId> = parser
        .parse_all(&stacked)
        .iter()
        .map(|r| r.game_id)
        .collect();
    assert_eq!(
        ids,
        vec![GameId::Connections, GameId::Strands, GameId::Wordle, GameId::Mini]
    );
}

#[test]
fn parse_all_does_not_double_count_a_block() {
    let parser = ShareParser::default();

    assert_eq!(parser.parse_all(CONNECTIONS_BLOCK).len(), 1);
    assert_eq!(parser.parse_all(WORDLE_BLOCK).len(), 1);
}

#[test]
fn shared_grid_vocabulary_does_not_confuse_matchers() {
    // A Wordle share whose grid uses the same colored squares must not be
    // reported as a Connections game too.
    let parser = ShareParser::default();
    let text = "Wordle 300 2/6\n🟨🟩🟨🟨🟨\n🟩🟩🟩🟩🟩";

    let results = parser.parse_all(text);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].game_id, GameId::Wordle);
}

#[test]
fn parsing_is_deterministic() {
    let parser = ShareParser::default();
    let stacked = format!("{}\n\n{}", WORDLE_BLOCK, CONNECTIONS_BLOCK);

    assert_eq!(parser.parse_one(&stacked), parser.parse_one(&stacked));
    assert_eq!(parser.parse_all(&stacked), parser.parse_all(&stacked));
}

#[test]
fn never_panics_on_hostile_input() {
    let parser = ShareParser::default();
    let hostile = [
        String::new(),
        "   ".to_string(),
        "\u{FEFF}\u{200B}\u{00A0}".to_string(),
        "<script>alert('x')</script>".to_string(),
        "a".repeat(10_000),
        "🟩".repeat(5_000),
        "wordle ".repeat(2_000),
        format!("{}{}", "9,".repeat(4_000), "9"),
        "\r\n".repeat(3_000),
    ];

    for text in hostile.iter() {
        assert_eq!(parser.parse_one(text), None, "input: {:.40}", text);
        assert_eq!(parser.parse_all(text), Vec::new());
    }
}

#[test]
fn injected_markup_inside_a_block_is_inert() {
    let parser = ShareParser::default();
    let result = parser
        .parse_one("Wordle 41 4/6 <img src=x onerror=alert(1)>")
        .unwrap();

    assert_eq!(result.puzzle_number, Some(41));
    assert_eq!(result.numeric_score, 15);
}

#[test]
fn trims_invisible_unicode_before_matching() {
    let parser = ShareParser::default();

    assert_matches!(
        parser.parse_one("\u{FEFF}\u{00A0} Wordle 52 3/6 \u{200B}\n"),
        Some(GameResult {
            puzzle_number: Some(52),
            ..
        })
    );
}

#[test]
fn wordle_scores_form_the_exact_step_table() {
    let parser = ShareParser::default();
    let mut seen = Vec::new();
    for token in ["1/6", "2/6", "3/6", "4/6", "5/6", "6/6", "X/6"] {
        let result = parser.parse_one(&format!("Wordle 1 {}", token)).unwrap();
        assert!(result.numeric_score <= 30);
        seen.push(result.numeric_score);
    }

    assert_eq!(seen, vec![30, 25, 20, 15, 10, 5, 0]);
}

#[test]
fn matchers_report_their_game() {
    assert_eq!(WordleMatcher.game_id(), GameId::Wordle);
    assert_eq!(ConnectionsMatcher.game_id(), GameId::Connections);
    assert_eq!(StrandsMatcher.game_id(), GameId::Strands);
    assert_eq!(MiniMatcher.game_id(), GameId::Mini);
}

#[test]
fn results_display_compactly() {
    let parser = ShareParser::default();

    let wordle = parser.parse_one(WORDLE_BLOCK).unwrap();
    assert_eq!(wordle.to_string(), "wordle #1234: 3/6 (20 points)");

    let mini = parser.parse_one("Mini in 1:23").unwrap();
    assert_eq!(mini.to_string(), "mini: 1:23 (27 points)");
}
