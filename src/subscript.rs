//! ASCII digit to Unicode subscript conversion.

const SUBSCRIPTS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Map a single ASCII digit to its subscript glyph.
///
/// Returns `None` for anything outside `'0'..='9'`.
pub fn subscript_digit(c: char) -> Option<char> {
    c.to_digit(10).map(|d| SUBSCRIPTS[d as usize])
}

/// Convert a run of digits to subscript glyphs.
///
/// Non-digit characters are passed through unchanged, so feeding an already
/// converted string back in is a no-op.
pub fn to_subscript(digits: &str) -> String {
    digits
        .chars()
        .map(|c| subscript_digit(c).unwrap_or(c))
        .collect()
}
