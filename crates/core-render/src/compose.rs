//! Frame composition from the editor model.
//!
//! Layout per frame:
//! * rows `0..text_height` show buffer lines `first_line..`, each prefixed by
//!   the dim line-number gutter;
//! * the last row, when reserved, shows the status line or the quit prompt.
//!
//! The quit prompt always gets a row, even when the status line is disabled,
//! because the y/n question must be visible to be answered.

use crate::status::{StatusContext, build_status};
use crate::{CellFlags, Frame};
use core_model::{EditorModel, Layout, gutter_width};
use core_state::Mode;

/// Presentation settings supplied by the binary (from configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub line_numbers: bool,
    pub gutter_min_digits: u16,
    pub status_line: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            gutter_min_digits: 3,
            status_line: true,
        }
    }
}

/// Screen layout for `model` on a `columns` x `rows` terminal.
pub fn layout_for(model: &EditorModel, opts: &RenderOptions, columns: u16, rows: u16) -> Layout {
    let state = model.state();
    let status_rows = u16::from(opts.status_line || state.is_confirming_quit());
    let gutter = gutter_width(
        state.buffer().line_count(),
        opts.gutter_min_digits,
        opts.line_numbers,
    );
    Layout::new(columns, rows, status_rows, gutter)
}

pub fn build_frame(model: &EditorModel, opts: &RenderOptions, columns: u16, rows: u16) -> Frame {
    let layout = layout_for(model, opts, columns, rows);
    let state = model.state();
    let buffer = state.buffer();
    let cursor = model.cursor();
    let viewport = model.viewport(&layout);
    let mut frame = Frame::new(columns, rows);
    if columns == 0 || rows == 0 {
        return frame;
    }

    // With a single row the open prompt wins over the text it would share
    // the row with.
    let status_y = layout
        .status_row()
        .or_else(|| state.is_confirming_quit().then_some(rows - 1));
    let text_rows = usize::from(rows.saturating_sub(layout.status_rows)).max(1);
    let digits = usize::from(layout.gutter_width.saturating_sub(1));
    for (screen_y, line_idx) in viewport.visible_lines(buffer.line_count()).enumerate() {
        if screen_y >= text_rows || status_y == Some(screen_y as u16) {
            break;
        }
        let y = screen_y as u16;
        let mut x = 0;
        if layout.gutter_width > 0 {
            let number = format!("{:>digits$} ", line_idx + 1);
            x = frame.put_str(0, y, &number, CellFlags::DIM);
        }
        if let Some(line) = buffer.line(line_idx) {
            frame.put_chars(
                x,
                y,
                line.iter().copied(),
                viewport.h_offset,
                CellFlags::empty(),
            );
        }
    }

    frame.cursor = viewport.cursor_screen(buffer, cursor, &layout);

    if let Some(status_y) = status_y {
        let prompt = match &state.mode {
            Mode::ConfirmQuit(p) => Some((p.label(), p.response())),
            Mode::Editing => None,
        };
        let status = build_status(&StatusContext {
            file_name: state.file_name(),
            dirty: state.dirty,
            line: cursor.line,
            col: cursor.col,
            message: state.ephemeral_status.as_ref().map(|m| m.text.as_str()),
            prompt,
        });
        let flags = if prompt.is_some() {
            CellFlags::empty()
        } else {
            CellFlags::REVERSE
        };
        let end = frame.put_str(0, status_y, &status, flags);
        if prompt.is_some() {
            frame.cursor = (end.min(columns - 1), status_y);
        }
    }
    tracing::trace!(
        target: "render",
        first_line = viewport.first_line,
        h_offset = viewport.h_offset,
        cursor_x = frame.cursor.0,
        cursor_y = frame.cursor.1,
        "frame_built"
    );
    frame
}
