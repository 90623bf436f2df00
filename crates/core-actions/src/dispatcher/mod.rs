//! Dispatcher applying `Action` to the editor model.
//!
//! Sub-modules:
//! * `motion`  - cursor movement
//! * `edit`    - text mutation (insert/newline/backspace)
//! * `command` - save and quit commands
//! * `prompt`  - the unsaved-changes quit prompt
//!
//! Every path leaves the cursor inside the buffer and the viewport is derived
//! from scratch at render time, so no dispatch needs to patch scroll state.

use crate::io_ops::Persistence;
use crate::{Action, translate_key};
use core_events::InputEvent;
use core_model::EditorModel;

mod command;
mod edit;
mod motion;
mod prompt;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to the model. Returns whether a render is needed (`dirty`)
/// or the session has ended (`quit`).
pub fn dispatch(
    action: Action,
    model: &mut EditorModel,
    persistence: &dyn Persistence,
) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Save => command::handle_save(state, persistence),
        Action::Quit => command::handle_quit(state),
        Action::Prompt(kind) => prompt::handle_prompt(kind, state, persistence),
    }
}

/// Translate and dispatch one input event. Keys with no meaning in the current
/// mode are dropped; a resize only requests a redraw.
pub fn handle_input(
    event: &InputEvent,
    model: &mut EditorModel,
    persistence: &dyn Persistence,
) -> DispatchResult {
    match event {
        InputEvent::Key(key) => match translate_key(&model.state().mode, key) {
            Some(action) => dispatch(action, model, persistence),
            None => DispatchResult::clean(),
        },
        InputEvent::Resize(cols, rows) => {
            tracing::debug!(target: "actions.dispatch", cols, rows, "resize");
            DispatchResult::dirty()
        }
    }
}
