#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, LoadedFile, PersistError, Persistence, handle_input};
use core_events::{InputEvent, KeyCode, KeyEvent};
use core_model::EditorModel;
use core_state::EditorState;
use core_text::{Buffer, Position};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory store recording every save; optionally fails all writes.
#[derive(Default)]
pub struct MemStore {
    pub saves: RefCell<Vec<(PathBuf, String)>>,
    pub fail_saves: bool,
}

impl MemStore {
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }

    pub fn last_saved(&self) -> Option<String> {
        self.saves.borrow().last().map(|(_, text)| text.clone())
    }
}

impl Persistence for MemStore {
    fn load(&self, _path: &Path) -> Result<LoadedFile, PersistError> {
        Ok(LoadedFile {
            buffer: Buffer::new(),
            is_new: true,
        })
    }

    fn save(&self, path: &Path, buffer: &Buffer) -> Result<(), PersistError> {
        if self.fail_saves {
            return Err(PersistError::Save {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        self.saves
            .borrow_mut()
            .push((path.to_path_buf(), buffer.to_text()));
        Ok(())
    }
}

pub fn model_from(text: &str) -> EditorModel {
    EditorModel::new(EditorState::new(Buffer::from_str(text), "a.txt"))
}

pub fn model_at(text: &str, line: usize, col: usize) -> EditorModel {
    let mut m = model_from(text);
    m.view_mut().cursor = Position::new(line, col);
    m
}

pub fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::plain(code))
}

pub fn ctrl(c: char) -> InputEvent {
    InputEvent::Key(KeyEvent::ctrl(c))
}

pub fn press(model: &mut EditorModel, store: &MemStore, event: InputEvent) -> DispatchResult {
    handle_input(&event, model, store)
}

pub fn type_str(model: &mut EditorModel, store: &MemStore, text: &str) {
    for c in text.chars() {
        press(model, store, key(KeyCode::Char(c)));
    }
}

pub fn text(model: &EditorModel) -> String {
    model.state().buffer().to_text()
}
