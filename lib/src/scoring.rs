//! Per-game numeric scoring tables.
//!
//! Every function here is a pure, deterministic mapping from extracted
//! fields to a bounded score, so results from different games can be
//! compared directly. The tables are fixed contracts; in particular the
//! Strands perfect bonus is a deliberate discontinuity, not a curve.

/// Scores a Wordle game from the number of guesses used (`None` for a
/// failed game).
///
/// | Guesses | 1  | 2  | 3  | 4  | 5  | 6 | fail |
/// |---------|----|----|----|----|----|---|------|
/// | Score   | 30 | 25 | 20 | 15 | 10 | 5 | 0    |
pub fn wordle_score(guesses: Option<u8>) -> u32 {
    match guesses {
        Some(guesses @ 1..=6) => (7 - u32::from(guesses)) * 5,
        _ => 0,
    }
}

/// Scores a Connections game: 30 for a perfect game, 5 fewer per mistake,
/// never below 5 for a win, and 0 for an unfinished game.
pub fn connections_score(won: bool, mistakes: u32) -> u32 {
    if !won {
        return 0;
    }
    30u32.saturating_sub(mistakes.saturating_mul(5)).max(5)
}

/// Scores a Strands game from the number of hints used.
///
/// A hint-free game earns a perfect bonus of 30; the first hint drops the
/// score to 16, each further hint costs 4 more, and the score never drops
/// below 5. The gap between 30 and 16 is intentional.
pub fn strands_score(hints: u32) -> u32 {
    if hints == 0 {
        return 30;
    }
    20u32.saturating_sub(hints.saturating_mul(4)).max(5)
}

/// Scores a Mini solve from its total time in seconds: one point lost per
/// ten seconds from a 35-point ceiling, floored at 5 (crossed at 300s).
pub fn mini_score(seconds: u32) -> u32 {
    35u32.saturating_sub(seconds / 10).max(5)
}
