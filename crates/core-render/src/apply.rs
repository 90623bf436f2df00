//! Render entry points: compose a frame for the current model and paint it.

use crate::compose::{RenderOptions, build_frame};
use crate::writer::Writer;
use crate::Frame;
use anyhow::Result;
use core_model::EditorModel;
use std::io::Write;

/// Full repaint of `model` on a `size` = (columns, rows) terminal via stdout.
pub fn render(model: &EditorModel, opts: &RenderOptions, size: (u16, u16)) -> Result<()> {
    let frame = build_frame(model, opts, size.0, size.1);
    let mut out = std::io::stdout().lock();
    paint(&frame, &mut out)
}

/// Emit `frame` to `out`: every row is cleared and redrawn, then the cursor is
/// placed. The cursor is hidden while drawing to avoid flicker.
pub fn paint<W: Write>(frame: &Frame, out: &mut W) -> Result<()> {
    let mut writer = Writer::new();
    writer.hide_cursor();
    for y in 0..frame.height {
        writer.move_to(0, y);
        writer.clear_line();
        for (text, flags) in frame.row_runs(y) {
            writer.print_styled(text, flags);
        }
    }
    writer.move_to(frame.cursor.0, frame.cursor.1);
    writer.show_cursor();
    writer.flush_to(out)
}
