//! Viewport computation.
//!
//! No scroll state is persisted between frames: the first visible line and
//! the horizontal offset are derived from scratch on every render from the
//! cursor, the document size and the layout. Edits that change the line count
//! or jump the cursor therefore can never leave the viewport stale.
//!
//! Guarantees of `compute_viewport` for `visible_height >= 1`:
//! * `first_line <= cursor_row < first_line + visible_height`
//! * `first_line <= max(0, line_count - visible_height)`

use crate::Layout;
use core_text::{Buffer, Position, visual_col};
use std::ops::Range;

/// First visible line for a window of `visible_height` rows.
///
/// Whole document fits: 0. Otherwise the cursor is centered vertically and the
/// result clamped so the window never scrolls past the last page.
pub fn compute_viewport(visible_height: usize, line_count: usize, cursor_row: usize) -> usize {
    if visible_height == 0 || line_count <= visible_height {
        return 0;
    }
    let max_start = line_count - visible_height;
    cursor_row.saturating_sub(visible_height / 2).min(max_start)
}

/// First visible cell column so that `cursor_cell` fits in `text_width` cells.
pub fn compute_horizontal_offset(cursor_cell: usize, text_width: usize) -> usize {
    if text_width == 0 || cursor_cell < text_width {
        return 0;
    }
    cursor_cell + 1 - text_width
}

/// Derived per-frame window into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub first_line: usize,
    pub height: usize,
    /// Cells of text skipped at the left edge (horizontal scroll).
    pub h_offset: usize,
}

impl Viewport {
    pub fn compute(buffer: &Buffer, cursor: Position, layout: &Layout) -> Self {
        let height = layout.text_height();
        let first_line = compute_viewport(height, buffer.line_count(), cursor.line);
        let cursor_cell = buffer
            .line(cursor.line)
            .map_or(0, |l| visual_col(l, cursor.col));
        let h_offset = compute_horizontal_offset(cursor_cell, layout.text_width());
        Self {
            first_line,
            height,
            h_offset,
        }
    }

    /// Buffer line indices drawn this frame.
    pub fn visible_lines(&self, line_count: usize) -> Range<usize> {
        let end = (self.first_line + self.height).min(line_count);
        self.first_line.min(end)..end
    }

    /// Terminal (column, row) of the cursor, accounting for the gutter prefix
    /// and horizontal offset. Clamped to the screen.
    pub fn cursor_screen(&self, buffer: &Buffer, cursor: Position, layout: &Layout) -> (u16, u16) {
        let cell = buffer
            .line(cursor.line)
            .map_or(0, |l| visual_col(l, cursor.col));
        let col = usize::from(layout.gutter_width) + cell.saturating_sub(self.h_offset);
        let max_col = usize::from(layout.columns.saturating_sub(1));
        let row = cursor.line.saturating_sub(self.first_line);
        let max_row = self.height.saturating_sub(1);
        (to_u16(col.min(max_col)), to_u16(row.min(max_row)))
    }
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
