//! Save and quit commands.
//!
//! Save failures are never fatal: the error is surfaced in the status line,
//! logged, and the buffer plus modified flag stay exactly as they were.

use super::DispatchResult;
use crate::io_ops::Persistence;
use core_state::{EditorState, Mode, QuitPrompt};

pub(crate) fn handle_save(state: &mut EditorState, persistence: &dyn Persistence) -> DispatchResult {
    save_document(state, persistence);
    DispatchResult::dirty()
}

pub(crate) fn handle_quit(state: &mut EditorState) -> DispatchResult {
    if !state.dirty {
        tracing::info!(target: "actions.dispatch", "quit_clean");
        return DispatchResult::quit();
    }
    tracing::debug!(target: "actions.dispatch", "quit_prompt_opened");
    state.mode = Mode::ConfirmQuit(QuitPrompt::new());
    DispatchResult::dirty()
}

/// Write the buffer to its file. Returns true on success.
pub(super) fn save_document(state: &mut EditorState, persistence: &dyn Persistence) -> bool {
    match persistence.save(state.file_name(), state.buffer()) {
        Ok(()) => {
            state.mark_saved();
            let msg = format!(
                "Saved {} lines to {}",
                state.buffer().line_count(),
                state.file_name().display()
            );
            state.set_ephemeral_default(msg);
            true
        }
        Err(e) => {
            tracing::error!(target: "actions.dispatch", error = %e, "save_failed");
            state.set_ephemeral_default(format!("Error saving: {e}"));
            false
        }
    }
}
