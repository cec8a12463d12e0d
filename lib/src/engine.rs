use crate::matchers::{
    ConnectionsMatcher, GameMatcher, MiniMatcher, ShareMatch, StrandsMatcher, WordleMatcher,
};
use crate::normalize::clean_text;
use crate::results::GameResult;

/// Parses puzzle-game share text against an ordered registry of matchers.
///
/// The registry is built once and never mutated; matching order is the
/// registration order, so the caller controls which game wins ties. Parsing
/// is a pure function of the input text: it never fails, never blocks, and
/// is safe to call from any number of threads.
///
/// ```
/// use rs_share_parser::{GameId, ShareParser};
///
/// let parser = ShareParser::default();
/// let result = parser.parse_one("Wordle 1,234 3/6").unwrap();
/// assert_eq!(result.game_id, GameId::Wordle);
/// assert_eq!(result.numeric_score, 20);
/// ```
pub struct ShareParser {
    matchers: Vec<Box<dyn GameMatcher>>,
}

impl ShareParser {
    /// Constructs a parser with a custom matcher registry. Matchers are
    /// consulted in the given order.
    pub fn new(matchers: Vec<Box<dyn GameMatcher>>) -> ShareParser {
        ShareParser { matchers }
    }

    /// Returns the first matching game's result, or `None` if the text
    /// contains no recognized game.
    ///
    /// When the text holds blocks from several games, the result comes from
    /// the first *matcher* in registration order that matches anywhere
    /// (first-match-wins), not from the block that appears earliest.
    pub fn parse_one(&self, text: &str) -> Option<GameResult> {
        let text = clean_text(text);
        if text.is_empty() {
            return None;
        }
        self.matchers.iter().find_map(|matcher| matcher.try_match(text))
    }

    /// Returns every distinct game block found, ordered by where each block
    /// appears in the source text. Returns an empty list if nothing matches.
    pub fn parse_all(&self, text: &str) -> Vec<GameResult> {
        let text = clean_text(text);
        if text.is_empty() {
            return Vec::new();
        }
        let mut found: Vec<(usize, usize, ShareMatch)> = Vec::new();
        for (registry_index, matcher) in self.matchers.iter().enumerate() {
            for share_match in matcher.find_matches(text) {
                found.push((share_match.start, registry_index, share_match));
            }
        }
        found.sort_by_key(|(start, registry_index, _)| (*start, *registry_index));
        // Two matchers claiming the same spot would double-count one block;
        // registration order decides.
        found.dedup_by_key(|(start, _, _)| *start);
        found
            .into_iter()
            .map(|(_, _, share_match)| share_match.result)
            .collect()
    }
}

impl Default for ShareParser {
    /// The standard registry: Wordle, Connections, Strands, then the Mini.
    fn default() -> ShareParser {
        ShareParser::new(vec![
            Box::new(WordleMatcher),
            Box::new(ConnectionsMatcher),
            Box::new(StrandsMatcher),
            Box::new(MiniMatcher),
        ])
    }
}
