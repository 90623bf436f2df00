//! Editor state: the document buffer, its backing file, the modified flag and
//! the session mode.
//!
//! `EditorState` is the single owner of text content. Cursor and viewport live
//! in `core-model` so that buffer editing semantics stay independent of
//! presentation.
//!
//! Modified flag:
//! - Starts `false` after a load.
//! - Set by every mutation that actually changed the buffer.
//! - Cleared only by a successful save (`mark_saved`).
//!
//! Mode:
//! - `Editing` is the only steady state.
//! - `ConfirmQuit` is entered when quit is requested with unsaved changes and
//!   collects a line-buffered y/n response (`QuitPrompt`).

use core_text::Buffer;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    ConfirmQuit(QuitPrompt),
}

/// What the user has typed so far in answer to the unsaved-changes prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuitPrompt {
    response: String,
    /// True after a response other than `y`/`n` was submitted; switches the
    /// prompt text to the re-prompt wording.
    reprompt: bool,
}

/// Outcome of submitting the current prompt response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitAnswer {
    Yes,
    No,
    Invalid,
}

pub const QUIT_PROMPT: &str = "File has unsaved changes. Save before quitting? (y/n): ";
pub const QUIT_REPROMPT: &str = "Please enter 'y' or 'n': ";

impl QuitPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn push(&mut self, c: char) {
        self.response.push(c);
    }

    pub fn pop(&mut self) {
        self.response.pop();
    }

    /// Evaluate and clear the response. An invalid answer arms the re-prompt.
    pub fn submit(&mut self) -> QuitAnswer {
        let answer = match self.response.as_str() {
            "y" => QuitAnswer::Yes,
            "n" => QuitAnswer::No,
            _ => QuitAnswer::Invalid,
        };
        self.response.clear();
        if answer == QuitAnswer::Invalid {
            self.reprompt = true;
        }
        answer
    }

    /// Prompt label currently shown before the response.
    pub fn label(&self) -> &'static str {
        if self.reprompt {
            QUIT_REPROMPT
        } else {
            QUIT_PROMPT
        }
    }
}

#[derive(Debug, Clone)]
pub struct EphemeralMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct EditorState {
    buffer: Buffer,
    pub file_name: PathBuf,
    pub dirty: bool,
    pub mode: Mode,
    pub ephemeral_status: Option<EphemeralMessage>,
    /// Lifetime given to messages posted via `set_ephemeral_default`.
    pub message_ttl: Duration,
}

impl EditorState {
    /// Create a clean state for `buffer` backed by `file_name`.
    pub fn new(buffer: Buffer, file_name: impl Into<PathBuf>) -> Self {
        Self {
            buffer,
            file_name: file_name.into(),
            dirty: false,
            mode: Mode::Editing,
            ephemeral_status: None,
            message_ttl: Duration::from_secs(3),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Mutable buffer access. Callers that change content must also call
    /// `mark_modified`.
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn mark_modified(&mut self) {
        if !self.dirty {
            tracing::trace!(target: "state", "modified_set");
            self.dirty = true;
        }
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn is_confirming_quit(&self) -> bool {
        matches!(self.mode, Mode::ConfirmQuit(_))
    }

    pub fn quit_prompt_mut(&mut self) -> Option<&mut QuitPrompt> {
        match &mut self.mode {
            Mode::ConfirmQuit(p) => Some(p),
            Mode::Editing => None,
        }
    }

    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S, ttl: Duration) {
        self.ephemeral_status = Some(EphemeralMessage {
            text: msg.into(),
            expires_at: Instant::now() + ttl,
        });
    }

    pub fn set_ephemeral_default<S: Into<String>>(&mut self, msg: S) {
        self.set_ephemeral(msg, self.message_ttl);
    }

    /// Tick ephemeral status; returns true if message expired and was cleared.
    pub fn tick_ephemeral(&mut self) -> bool {
        if let Some(m) = &self.ephemeral_status
            && Instant::now() >= m.expires_at
        {
            self.ephemeral_status = None;
            return true;
        }
        false
    }
}
