//! Per-codepoint display width.
//!
//! All screen column decisions (cursor placement, truncation, horizontal offset)
//! flow through `char_width` so the renderer and the cursor controller can never
//! disagree about where a character lands.
//!
//! Invariants:
//! - Control characters are drawn as `?` and occupy exactly one cell.
//! - Zero-width codepoints (combining marks) occupy no cell of their own.
//! - Wide codepoints (CJK, most emoji) occupy two cells.

use unicode_width::UnicodeWidthChar;

/// Replacement glyph for characters the terminal must not receive raw.
pub const CONTROL_PLACEHOLDER: char = '?';

/// Terminal cell width of a single codepoint as drawn by the renderer.
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 1;
    }
    c.width().unwrap_or(0)
}

/// The character actually emitted for `c`.
pub fn display_char(c: char) -> char {
    if c.is_control() {
        CONTROL_PLACEHOLDER
    } else {
        c
    }
}

/// Visual column (cells) up to, but not including, character offset `col`.
/// Offsets past the end of the line are clamped to the line length.
pub fn visual_col(line: &[char], col: usize) -> usize {
    line.iter().take(col).map(|&c| char_width(c)).sum()
}
