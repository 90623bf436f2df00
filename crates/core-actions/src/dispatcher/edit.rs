//! Text edit action handling (insert/newline/backspace).
//!
//! Mutates the buffer through `core_text::Buffer` and moves the view cursor to
//! the resulting position. The modified flag is raised only when the buffer
//! actually changed, so backspace at the document origin leaves a clean
//! buffer clean.

use super::DispatchResult;
use crate::EditKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let mut pos = view.cursor;
    let (op, mutated) = match kind {
        EditKind::InsertChar(c) => {
            state.buffer_mut().insert_char(&mut pos, c);
            ("insert_char", true)
        }
        EditKind::InsertNewline => {
            state.buffer_mut().insert_newline(&mut pos);
            ("insert_newline", true)
        }
        EditKind::Backspace => ("backspace", state.buffer_mut().delete_char_before(&mut pos)),
    };
    view.cursor = pos;
    // Content is never logged; only positions.
    tracing::trace!(
        target: "actions.dispatch",
        op,
        line = before.line,
        col = before.col,
        to_line = view.cursor.line,
        to_col = view.cursor.col,
        mutated,
        "edit"
    );
    if mutated {
        state.mark_modified();
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Buffer, Position};

    fn setup(lines: &[&str], cursor: Position) -> (EditorState, View) {
        (
            EditorState::new(Buffer::from_lines(lines), "t.txt"),
            View::new(cursor),
        )
    }

    #[test]
    fn insert_char_advances_cursor() {
        let (mut st, mut v) = setup(&["ac"], Position::new(0, 1));
        let r = handle_edit(EditKind::InsertChar('b'), &mut st, &mut v);
        assert!(r.dirty);
        assert_eq!(st.buffer().line_string(0).unwrap(), "abc");
        assert_eq!(v.cursor, Position::new(0, 2));
        assert!(st.dirty);
    }

    #[test]
    fn backspace_merges_lines_at_join_point() {
        let (mut st, mut v) = setup(&["foo", "bar"], Position::new(1, 0));
        handle_edit(EditKind::Backspace, &mut st, &mut v);
        assert_eq!(st.buffer().line_count(), 1);
        assert_eq!(st.buffer().line_string(0).unwrap(), "foobar");
        assert_eq!(v.cursor, Position::new(0, 3));
    }

    #[test]
    fn backspace_at_origin_is_clean_noop() {
        let (mut st, mut v) = setup(&["x"], Position::origin());
        let r = handle_edit(EditKind::Backspace, &mut st, &mut v);
        assert_eq!(r, DispatchResult::clean());
        assert!(!st.dirty);
        assert_eq!(st.buffer().line_string(0).unwrap(), "x");
    }
}
