//! High-level editor model: the document state plus the view that tracks the
//! cursor over it.
//!
//! A `View` owns presentation state (the cursor) that is kept out of
//! `EditorState`, so buffer editing semantics stay decoupled from navigation
//! and viewport concerns.
//!
//! Core invariants (must hold after every public call):
//! * `0 <= cursor.line < line_count`.
//! * `0 <= cursor.col <= line_len(cursor.line)`.
//! * Motions never wrap across lines: left/right stop at the line edges,
//!   up/down keep the column unless the target line is shorter, in which case
//!   the cursor is pulled to its end.

use core_state::EditorState;
use core_text::{Buffer, Position};
use tracing::trace;
mod layout;
pub mod viewport;
pub use layout::{Layout, gutter_width};
pub use viewport::{Viewport, compute_horizontal_offset, compute_viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Default)]
pub struct View {
    pub cursor: Position,
}

impl View {
    pub fn new(cursor: Position) -> Self {
        Self { cursor }
    }

    /// Apply a single-step motion. Returns true if the cursor moved.
    pub fn apply_motion(&mut self, kind: MotionKind, buffer: &Buffer) -> bool {
        let before = self.cursor;
        match kind {
            MotionKind::Left => self.move_left(buffer),
            MotionKind::Right => self.move_right(buffer),
            MotionKind::Up => self.move_up(buffer),
            MotionKind::Down => self.move_down(buffer),
        }
        self.cursor != before
    }

    pub fn move_left(&mut self, buffer: &Buffer) {
        buffer.clamp(&mut self.cursor);
        self.cursor.col = self.cursor.col.saturating_sub(1);
    }

    pub fn move_right(&mut self, buffer: &Buffer) {
        buffer.clamp(&mut self.cursor);
        if self.cursor.col < buffer.line_len(self.cursor.line) {
            self.cursor.col += 1;
        }
    }

    pub fn move_up(&mut self, buffer: &Buffer) {
        self.cursor.line = self.cursor.line.saturating_sub(1);
        self.clamp_column(buffer);
    }

    pub fn move_down(&mut self, buffer: &Buffer) {
        if self.cursor.line + 1 < buffer.line_count() {
            self.cursor.line += 1;
        }
        self.clamp_column(buffer);
    }

    fn clamp_column(&mut self, buffer: &Buffer) {
        let from_col = self.cursor.col;
        buffer.clamp(&mut self.cursor);
        if self.cursor.col != from_col {
            trace!(
                target: "model",
                line = self.cursor.line,
                from_col,
                to_col = self.cursor.col,
                "column_clamped"
            );
        }
    }

    /// Pull the cursor back into range after an external buffer change.
    pub fn clamp_into(&mut self, buffer: &Buffer) {
        buffer.clamp(&mut self.cursor);
    }
}

pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    /// Seed a model with the cursor at the origin.
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            view: View::default(),
        }
    }

    /// Test/helper constructor allowing a prepared cursor to be injected. The
    /// cursor is clamped into the buffer.
    pub fn with_view(mut view: View, state: EditorState) -> Self {
        view.clamp_into(state.buffer());
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn cursor(&self) -> Position {
        self.view.cursor
    }

    /// Disjoint mutable borrows of the state and the view.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Viewport for the given screen layout, derived from the current cursor.
    pub fn viewport(&self, layout: &Layout) -> Viewport {
        Viewport::compute(self.state.buffer(), self.view.cursor, layout)
    }
}
