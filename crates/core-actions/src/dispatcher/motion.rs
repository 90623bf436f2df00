//! Motion sub-dispatch (cursor movement).
//!
//! Horizontal motions stop at line edges; vertical motions clamp the column to
//! the target line. A motion that cannot move (top line, end of line, ...)
//! reports `clean` so the runtime can skip the redraw.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let moved = view.apply_motion(kind, state.buffer());
    tracing::trace!(
        target: "actions.dispatch",
        ?kind,
        from_line = before.line,
        from_col = before.col,
        to_line = view.cursor.line,
        to_col = view.cursor.col,
        "motion"
    );
    if moved {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
