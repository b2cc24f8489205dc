//! Glyph sequences for the rolling digit animation.
//!
//! A digit changing from `3` to `6` rolls through `3 4 5 6`; the strip is
//! then translated up so the last glyph ends in view.

/// Glyphs passed through when rolling from `previous` to `current`.
///
/// Punctuation never rolls, and a digit paired with punctuation shows only
/// its final glyph.
pub fn roll_sequence(previous: char, current: char) -> Vec<char> {
    let (Some(from), Some(to)) = (previous.to_digit(10), current.to_digit(10)) else {
        return vec![current];
    };

    let digits: Vec<u32> = if to >= from {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    };

    digits
        .into_iter()
        .filter_map(|d| char::from_digit(d, 10))
        .collect()
}

/// Vertical offset, in pixels, that brings the last glyph of a strip into view.
pub fn roll_offset(sequence_len: usize, digit_height: u32) -> i64 {
    -(sequence_len.saturating_sub(1) as i64) * digit_height as i64
}

/// Pair each displayed character with the one previously at its position,
/// defaulting to `'0'` when the previous string was shorter.
pub fn pair_glyphs(previous: &str, current: &str) -> Vec<(char, char)> {
    let mut prev = previous.chars();
    current
        .chars()
        .map(|c| (prev.next().unwrap_or('0'), c))
        .collect()
}

pub fn is_punctuation(c: char) -> bool {
    matches!(c, '.' | ':')
}
