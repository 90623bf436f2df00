//! Edit session: the `Action` model, key translation, the dispatcher that
//! applies actions to the editor model, and the persistence adapter.
//!
//! Flow for one input event:
//! 1. `translate_key` maps a normalized key (plus the current mode) to an
//!    `Action`, or `None` when the key has no meaning in that mode.
//! 2. `dispatch` applies the action to `EditorModel`, consulting the
//!    `Persistence` adapter for saves.
//! 3. The returned `DispatchResult` tells the runtime whether to re-render
//!    and whether the session has ended.

pub mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use core_model::MotionKind;
pub use dispatcher::{DispatchResult, dispatch, handle_input};
pub use io_ops::{FsPersistence, LoadedFile, PersistError, Persistence};
pub use key_translator::translate_key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Edit(EditKind),
    Motion(MotionKind),
    Save,
    Quit,
    Prompt(PromptKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertNewline,
    Backspace,
}

/// Editing of the unsaved-changes quit prompt response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Push(char),
    Pop,
    Submit,
    Cancel,
}
