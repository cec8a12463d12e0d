use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::{is_blank, lines, parse_puzzle_number};
use crate::results::{GameId, GameMeta, GameResult};
use crate::scoring;

/// A single recognized game block, with the byte offset where it begins in
/// the searched text so multi-result extraction can order blocks by source
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMatch {
    pub start: usize,
    pub result: GameResult,
}

/// Recognizes one game's share text.
///
/// Implementations are pure: they hold no state, never fail, and scan in
/// time linear in the input. A matcher either extracts a fully-populated
/// [`GameResult`] or reports nothing; there is no partial extraction.
pub trait GameMatcher {
    /// The game this matcher recognizes.
    fn game_id(&self) -> GameId;

    /// Returns every non-overlapping match in `text`, in source order.
    fn find_matches(&self, text: &str) -> Vec<ShareMatch>;

    /// Returns the first match in `text`, if any.
    fn try_match(&self, text: &str) -> Option<GameResult> {
        self.find_matches(text).into_iter().next().map(|m| m.result)
    }
}

static WORDLE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bwordle\s+(\d[\d,]*)\s+([1-6x])/6\b(\*)?").expect("valid wordle header regex")
});

/// Matches the Wordle share header: the keyword, a puzzle number, and a
/// score of `1-6/6` or the fail marker `X/6`, with an optional hard-mode
/// `*`. The color grid that usually follows is not required; the header
/// alone carries everything the result needs, and any surrounding prose,
/// markup, or emoji noise is ignored.
pub struct WordleMatcher;

impl GameMatcher for WordleMatcher {
    fn game_id(&self) -> GameId {
        GameId::Wordle
    }

    fn find_matches(&self, text: &str) -> Vec<ShareMatch> {
        let mut matches = Vec::new();
        for caps in WORDLE_HEADER_RE.captures_iter(text) {
            let number_token = caps.get(1).map_or("", |m| m.as_str());
            let puzzle_number = match parse_puzzle_number(number_token) {
                Some(number) => number,
                None => continue,
            };
            let score_token = caps.get(2).map_or("", |m| m.as_str());
            let won = !score_token.eq_ignore_ascii_case("x");
            let guesses = if won {
                score_token.parse::<u8>().ok()
            } else {
                None
            };
            let raw_score = if won {
                format!("{}/6", score_token)
            } else {
                "X/6".to_string()
            };
            let hard_mode = caps.get(3).is_some();
            matches.push(ShareMatch {
                start: caps.get(0).map_or(0, |m| m.start()),
                result: GameResult {
                    game_id: GameId::Wordle,
                    puzzle_number: Some(puzzle_number),
                    raw_score,
                    won,
                    numeric_score: scoring::wordle_score(guesses),
                    meta: GameMeta::Wordle { guesses, hard_mode },
                },
            });
        }
        matches
    }
}

static CONNECTIONS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bconnections\s+puzzle\s*#?\s*(\d[\d,]*)")
        .expect("valid connections header regex")
});

/// The four category squares. Each is a single Unicode scalar value in
/// Rust, so counting `char`s counts visual glyphs exactly; the row-width
/// contract is four *visual* squares, never four UTF-16 code units (a trap
/// for hosts that index strings by code unit, where each square is two).
const CONNECTIONS_SQUARES: [char; 4] = ['🟨', '🟩', '🟦', '🟪'];

enum RowKind {
    /// Four squares of a single color: one fully-solved category.
    Clean,
    /// A guess row that did not complete a category.
    Mixed,
}

fn connections_row(line: &str) -> Option<RowKind> {
    let mut count = 0usize;
    let mut first = None;
    let mut uniform = true;
    for c in line.chars() {
        if !CONNECTIONS_SQUARES.contains(&c) {
            return None;
        }
        count += 1;
        match first {
            None => first = Some(c),
            Some(f) if f != c => uniform = false,
            _ => {}
        }
    }
    if count == 0 {
        return None;
    }
    if count == 4 && uniform {
        Some(RowKind::Clean)
    } else {
        Some(RowKind::Mixed)
    }
}

/// Matches a Connections share: a `Connections` / `Puzzle #N` header with
/// flexible whitespace between the two words, followed by a grid of guess
/// rows drawn from the four category squares.
///
/// A game is won once four clean rows appear, in any color order; mixed
/// rows before that point are mistakes. A grid with fewer than four clean
/// rows still parses, as an unfinished (lost) game.
pub struct ConnectionsMatcher;

impl GameMatcher for ConnectionsMatcher {
    fn game_id(&self) -> GameId {
        GameId::Connections
    }

    fn find_matches(&self, text: &str) -> Vec<ShareMatch> {
        let mut matches = Vec::new();
        for caps in CONNECTIONS_HEADER_RE.captures_iter(text) {
            let number_token = caps.get(1).map_or("", |m| m.as_str());
            let puzzle_number = match parse_puzzle_number(number_token) {
                Some(number) => number,
                None => continue,
            };
            let header = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let tail = &text[header.end()..];
            // The grid starts on the line after the header's number.
            let grid = match tail.find('\n') {
                Some(newline) => &tail[newline + 1..],
                None => "",
            };

            let mut clean = 0u32;
            let mut mistakes = 0u32;
            let mut rows_seen = false;
            for line in lines(grid) {
                let line = line.trim_matches(is_blank);
                if line.is_empty() {
                    if rows_seen {
                        break;
                    }
                    continue;
                }
                match connections_row(line) {
                    Some(RowKind::Clean) => {
                        rows_seen = true;
                        clean += 1;
                    }
                    Some(RowKind::Mixed) => {
                        rows_seen = true;
                        // Rows after the fourth clean row are inert.
                        if clean < 4 {
                            mistakes += 1;
                        }
                    }
                    None => break,
                }
            }

            let won = clean >= 4;
            matches.push(ShareMatch {
                start: header.start(),
                result: GameResult {
                    game_id: GameId::Connections,
                    puzzle_number: Some(puzzle_number),
                    raw_score: format!("{}/4", clean.min(4)),
                    won,
                    numeric_score: scoring::connections_score(won, mistakes),
                    meta: GameMeta::Connections {
                        mistakes,
                        perfect: won && mistakes == 0,
                    },
                },
            });
        }
        matches
    }
}

static STRANDS_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bstrands\s*#?\s*(\d[\d,]*)").expect("valid strands header regex"));

/// Spangram, found word, and hint markers used by the Strands grid.
const STRANDS_SYMBOLS: [char; 3] = ['🟡', '🔵', '💡'];

/// Matches a Strands share: the keyword and puzzle number (with or without
/// a `#`), then a grid of word/hint markers. Hints are counted anywhere in
/// the grid; finding the spangram (the yellow marker) wins the game. The
/// quoted theme line some shares place between header and grid is skipped.
pub struct StrandsMatcher;

impl GameMatcher for StrandsMatcher {
    fn game_id(&self) -> GameId {
        GameId::Strands
    }

    fn find_matches(&self, text: &str) -> Vec<ShareMatch> {
        let mut matches = Vec::new();
        for caps in STRANDS_HEADER_RE.captures_iter(text) {
            let number_token = caps.get(1).map_or("", |m| m.as_str());
            let puzzle_number = match parse_puzzle_number(number_token) {
                Some(number) => number,
                None => continue,
            };
            let header = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let tail = &text[header.end()..];
            let grid = match tail.find('\n') {
                Some(newline) => &tail[newline + 1..],
                None => "",
            };

            let mut hints = 0u32;
            let mut spangram = false;
            let mut rows_seen = false;
            let mut prose_skipped = false;
            for line in lines(grid) {
                let line = line.trim_matches(is_blank);
                if line.is_empty() {
                    if rows_seen {
                        break;
                    }
                    continue;
                }
                if line.chars().all(|c| STRANDS_SYMBOLS.contains(&c)) {
                    rows_seen = true;
                    for c in line.chars() {
                        match c {
                            '💡' => hints += 1,
                            '🟡' => spangram = true,
                            _ => {}
                        }
                    }
                } else if rows_seen || prose_skipped {
                    break;
                } else {
                    prose_skipped = true;
                }
            }

            let raw_score = if hints == 0 {
                "perfect".to_string()
            } else {
                format!("{} hints", hints)
            };
            matches.push(ShareMatch {
                start: header.start(),
                result: GameResult {
                    game_id: GameId::Strands,
                    puzzle_number: Some(puzzle_number),
                    raw_score,
                    won: spangram,
                    numeric_score: scoring::strands_score(hints),
                    meta: GameMeta::Strands {
                        hints,
                        perfect: hints == 0,
                    },
                },
            });
        }
        matches
    }
}

static MINI_CONTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:mini|crossword)\b").expect("valid mini context regex"));

static MINI_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,3}):([0-5][0-9])\b").expect("valid mini time regex"));

/// Matches a Mini Crossword share: a `M:SS` completion time on a line that
/// also mentions `mini` or `crossword`.
///
/// The keyword requirement is the disambiguation policy: a bare time token
/// with no game context (a lone "0:15" in unrelated prose) never matches.
/// The Mini's share text carries no published puzzle index, so
/// `puzzle_number` is `None`.
pub struct MiniMatcher;

impl GameMatcher for MiniMatcher {
    fn game_id(&self) -> GameId {
        GameId::Mini
    }

    fn find_matches(&self, text: &str) -> Vec<ShareMatch> {
        let mut matches = Vec::new();
        let mut offset = 0usize;
        for raw_line in text.split('\n') {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            if MINI_CONTEXT_RE.is_match(line) {
                if let Some(caps) = MINI_TIME_RE.captures(line) {
                    let token = match caps.get(0) {
                        Some(m) => m,
                        None => continue,
                    };
                    let minutes: u32 = caps
                        .get(1)
                        .and_then(|m| m.as_str().parse().ok())
                        .unwrap_or(0);
                    let seconds: u32 = caps
                        .get(2)
                        .and_then(|m| m.as_str().parse().ok())
                        .unwrap_or(0);
                    let total_seconds = minutes * 60 + seconds;
                    matches.push(ShareMatch {
                        start: offset + token.start(),
                        result: GameResult {
                            game_id: GameId::Mini,
                            puzzle_number: None,
                            raw_score: token.as_str().to_string(),
                            won: true,
                            numeric_score: scoring::mini_score(total_seconds),
                            meta: GameMeta::Mini {
                                seconds: total_seconds,
                            },
                        },
                    });
                }
            }
            offset += raw_line.len() + 1;
        }
        matches
    }
}
