//! Parses and scores the share text of daily puzzle games.
//!
//! Given free-form text pasted from a game's share button, this library
//! identifies which game produced it (Wordle, Connections, Strands, or the
//! Mini Crossword) and extracts a normalized [`GameResult`]: puzzle number,
//! raw score token, win state, a deterministic numeric score, and
//! game-specific metadata. Parsing is total: hostile, malformed, or
//! oversized input yields "no match", never a panic.
//!
//! ```
//! use rs_share_parser::{GameId, GameMeta, ShareParser};
//!
//! let parser = ShareParser::default();
//!
//! let result = parser.parse_one("Wordle 1,234 X/6").unwrap();
//! assert_eq!(result.game_id, GameId::Wordle);
//! assert_eq!(result.puzzle_number, Some(1234));
//! assert!(!result.won);
//! assert_eq!(result.numeric_score, 0);
//!
//! let results = parser.parse_all("Wordle 5 2/6\n\nStrands #5\n🟡🔵🔵");
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[1].meta, GameMeta::Strands { hints: 0, perfect: true });
//! ```

mod engine;
mod matchers;
mod normalize;
mod results;
mod scoring;

pub use engine::*;
pub use matchers::*;
pub use normalize::clean_text;
pub use normalize::parse_puzzle_number;
pub use results::*;
pub use scoring::*;
