//! Unsaved-changes quit prompt.
//!
//! The response is line buffered: characters accumulate until Enter, when
//! `y` saves and quits, `n` quits without saving and anything else re-prompts.
//! A failed save keeps the prompt open with an empty response. Esc returns to
//! editing.

use super::DispatchResult;
use super::command::save_document;
use crate::PromptKind;
use crate::io_ops::Persistence;
use core_state::{EditorState, Mode, QuitAnswer};

pub(crate) fn handle_prompt(
    kind: PromptKind,
    state: &mut EditorState,
    persistence: &dyn Persistence,
) -> DispatchResult {
    let Some(prompt) = state.quit_prompt_mut() else {
        return DispatchResult::clean();
    };
    match kind {
        PromptKind::Push(c) => {
            prompt.push(c);
            DispatchResult::dirty()
        }
        PromptKind::Pop => {
            prompt.pop();
            DispatchResult::dirty()
        }
        PromptKind::Cancel => {
            tracing::debug!(target: "actions.dispatch", "quit_prompt_cancelled");
            state.mode = Mode::Editing;
            DispatchResult::dirty()
        }
        PromptKind::Submit => match prompt.submit() {
            QuitAnswer::Yes => {
                if save_document(state, persistence) {
                    tracing::info!(target: "actions.dispatch", "quit_after_save");
                    DispatchResult::quit()
                } else {
                    DispatchResult::dirty()
                }
            }
            QuitAnswer::No => {
                tracing::info!(target: "actions.dispatch", "quit_discarding_changes");
                DispatchResult::quit()
            }
            QuitAnswer::Invalid => DispatchResult::dirty(),
        },
    }
}
