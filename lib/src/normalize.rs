//! Input preparation shared by every matcher.
//!
//! Normalization is deliberately conservative: leading and trailing noise is
//! trimmed, but internal structure (the newlines separating grid rows) is
//! never collapsed. Keyword case folding happens inside the matchers, not
//! here, since grid symbols are case-irrelevant while surrounding prose may
//! be meaningfully cased.

/// Returns `true` for characters that count as removable edge noise:
/// ordinary whitespace plus the invisible Unicode characters that ride
/// along with copied share text (NBSP, zero-width space/joiners, BOM).
pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{00A0}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}')
}

/// Trims leading/trailing whitespace-like characters, including the
/// invisible Unicode ones, without touching interior newlines.
pub fn clean_text(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Iterates over lines, treating `\r\n` and `\n` endings alike.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Parses a puzzle number token, stripping comma thousands separators
/// (e.g. "12,345" → 12345).
///
/// Parsing is checked: a token whose value does not fit in a `u32` yields
/// `None` rather than a truncated number.
pub fn parse_puzzle_number(token: &str) -> Option<u32> {
    let mut number: u32 = 0;
    let mut seen_digit = false;
    for c in token.chars() {
        match c {
            ',' => continue,
            '0'..='9' => {
                seen_digit = true;
                number = number
                    .checked_mul(10)?
                    .checked_add(c as u32 - '0' as u32)?;
            }
            _ => return None,
        }
    }
    if seen_digit {
        Some(number)
    } else {
        None
    }
}
