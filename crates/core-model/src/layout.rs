//! Screen geometry for a single full-terminal view.
//!
//! Rows are split into the text area (top) and an optional status row
//! (bottom). Columns are split into the line-number gutter (left) and the text
//! area. All values are terminal cell units.
//!
//! Invariants:
//! * `text_height() >= 1` even on a degenerate terminal, so viewport math never
//!   divides the document into empty pages.
//! * The gutter width is fixed for a whole frame.

/// Single space separating the line number from the text.
const GUTTER_PAD: u16 = 1;
const MAX_GUTTER_DIGITS: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: u16,
    pub rows: u16,
    pub status_rows: u16,
    pub gutter_width: u16,
}

impl Layout {
    pub fn new(columns: u16, rows: u16, status_rows: u16, gutter_width: u16) -> Self {
        Self {
            columns,
            rows,
            status_rows,
            gutter_width,
        }
    }

    /// Number of rows available for buffer text.
    pub fn text_height(&self) -> usize {
        usize::from(self.rows.saturating_sub(self.status_rows)).max(1)
    }

    /// Number of columns available for buffer text after the gutter.
    pub fn text_width(&self) -> usize {
        usize::from(self.columns.saturating_sub(self.gutter_width))
    }

    /// Screen row of the status line, if one is reserved and fits.
    pub fn status_row(&self) -> Option<u16> {
        if self.status_rows == 0 || self.rows <= self.status_rows {
            return None;
        }
        Some(self.rows - 1)
    }
}

/// Width of the line-number gutter for a document of `line_count` lines:
/// `max(min_digits, digits(line_count))` plus one separating space, or 0 when
/// line numbers are disabled.
pub fn gutter_width(line_count: usize, min_digits: u16, enabled: bool) -> u16 {
    if !enabled {
        return 0;
    }
    let digits = decimal_digits(line_count).max(min_digits.clamp(1, MAX_GUTTER_DIGITS));
    digits + GUTTER_PAD
}

fn decimal_digits(mut n: usize) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
