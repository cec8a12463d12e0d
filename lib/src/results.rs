use std::fmt;

/// Identifies which daily puzzle game produced a share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameId {
    Wordle,
    Connections,
    Strands,
    Mini,
}

impl GameId {
    /// Returns the lowercase tag used for this game in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Wordle => "wordle",
            GameId::Connections => "connections",
            GameId::Strands => "strands",
            GameId::Mini => "mini",
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game-specific extras extracted alongside the score.
///
/// Each variant carries exactly the fields that game's share text can
/// express, so a `GameResult` can never hold the wrong kind of metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameMeta {
    Wordle {
        /// The number of guesses used, or `None` for a failed game.
        guesses: Option<u8>,
        /// Whether the share carried the hard-mode marker (`*`).
        hard_mode: bool,
    },
    Connections {
        /// Guess rows that were not a single completed category.
        mistakes: u32,
        perfect: bool,
    },
    Strands {
        /// Hint markers counted anywhere in the grid.
        hints: u32,
        perfect: bool,
    },
    Mini {
        /// Total solve time in seconds.
        seconds: u32,
    },
}

/// One recognized game result, extracted from share text.
///
/// This is an immutable value type: parsing the same text twice yields
/// field-wise identical records, and `numeric_score` is a pure function of
/// the other fields. A result is only ever produced fully populated; there
/// is no partially-extracted form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    pub game_id: GameId,
    /// The game's published puzzle index. `None` only for games whose share
    /// text carries no index (currently the Mini).
    pub puzzle_number: Option<u32>,
    /// The literal score token, preserved for display and auditing
    /// (e.g. "3/6", "X/6", "2 hints", "1:23").
    pub raw_score: String,
    pub won: bool,
    /// Cross-game comparison score. See the `scoring` module for the
    /// per-game tables.
    pub numeric_score: u32,
    pub meta: GameMeta,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.puzzle_number {
            Some(number) => write!(
                f,
                "{} #{}: {} ({} points)",
                self.game_id, number, self.raw_score, self.numeric_score
            ),
            None => write!(
                f,
                "{}: {} ({} points)",
                self.game_id, self.raw_score, self.numeric_score
            ),
        }
    }
}
