//! Persistence adapter: file bytes <-> `Buffer`.
//!
//! Synchronous and minimal. Serialization rules live in `core_text::Buffer`
//! (`from_str` / `to_text`) so the adapter only deals with the filesystem and
//! error classification.
//!
//! Load semantics:
//! * `NotFound` from the read itself means a new file: one empty line. No
//!   separate existence check is made, so a file vanishing between check and
//!   read cannot be misclassified.
//! * Any other read failure, including content that is not valid UTF-8, is a
//!   `PersistError::Load`.

use core_text::Buffer;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of a successful load.
#[derive(Debug)]
pub struct LoadedFile {
    pub buffer: Buffer,
    /// True when the file did not exist and the buffer starts empty.
    pub is_new: bool,
}

/// Storage collaborator consulted by the edit session.
pub trait Persistence {
    fn load(&self, path: &Path) -> Result<LoadedFile, PersistError>;
    fn save(&self, path: &Path, buffer: &Buffer) -> Result<(), PersistError>;
}

/// Plain filesystem persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPersistence;

impl Persistence for FsPersistence {
    fn load(&self, path: &Path) -> Result<LoadedFile, PersistError> {
        let load_err = |source| PersistError::Load {
            path: path.to_path_buf(),
            source,
        };
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(target: "io", file = %path.display(), "file_absent_new_buffer");
                return Ok(LoadedFile {
                    buffer: Buffer::new(),
                    is_new: true,
                });
            }
            Err(e) => {
                tracing::error!(target: "io", file = %path.display(), ?e, "file_open_error");
                return Err(load_err(e));
            }
        };
        let size_bytes = bytes.len();
        let content = String::from_utf8(bytes).map_err(|e| {
            tracing::error!(target: "io", file = %path.display(), "file_not_utf8");
            load_err(io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        let buffer = Buffer::from_str(&content);
        tracing::debug!(
            target: "io",
            file = %path.display(),
            size_bytes,
            line_count = buffer.line_count(),
            "file_read_ok"
        );
        Ok(LoadedFile {
            buffer,
            is_new: false,
        })
    }

    fn save(&self, path: &Path, buffer: &Buffer) -> Result<(), PersistError> {
        let content = buffer.to_text();
        match std::fs::write(path, content.as_bytes()) {
            Ok(()) => {
                tracing::info!(
                    target: "io",
                    file = %path.display(),
                    size_bytes = content.len(),
                    line_count = buffer.line_count(),
                    "file_write_ok"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(target: "io", file = %path.display(), ?e, "file_write_error");
                Err(PersistError::Save {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_new_empty_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FsPersistence.load(&dir.path().join("absent.txt")).unwrap();
        assert!(loaded.is_new);
        assert_eq!(loaded.buffer, Buffer::new());
    }

    #[test]
    fn existing_file_loads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "line1\nline2\n").unwrap();
        let loaded = FsPersistence.load(&path).unwrap();
        assert!(!loaded.is_new);
        assert_eq!(loaded.buffer.line_count(), 3);
        assert_eq!(loaded.buffer.line_string(1).unwrap(), "line2");
        assert_eq!(loaded.buffer.line_string(2).unwrap(), "");
    }

    #[test]
    fn directory_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsPersistence.load(dir.path()).unwrap_err();
        assert!(matches!(&err, PersistError::Load { path, .. } if path == dir.path()));
    }

    #[test]
    fn invalid_utf8_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.dat");
        std::fs::write(&path, [0x66, 0xff, 0xfe, 0x0a]).unwrap();
        let err = FsPersistence.load(&path).unwrap_err();
        match err {
            PersistError::Load { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData)
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn save_joins_lines_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let buffer = Buffer::from_lines(["a", "b", ""]);
        FsPersistence.save(&path, &buffer).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
        FsPersistence.save(&path, &Buffer::from_lines(["x"])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        let err = FsPersistence.save(&path, &Buffer::new()).unwrap_err();
        assert!(matches!(err, PersistError::Save { .. }));
        assert!(err.to_string().starts_with("cannot write"));
    }

    #[test]
    fn load_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cases = ["", "\n", "a\n\n\n", "   \n\t", "x\r\ny", "no newline"];
        for (i, text) in cases.iter().enumerate() {
            let path = dir.path().join(format!("rt{i}.txt"));
            std::fs::write(&path, text).unwrap();
            let first = FsPersistence.load(&path).unwrap().buffer;
            FsPersistence.save(&path, &first).unwrap();
            assert_eq!(std::fs::read_to_string(&path).unwrap(), *text);
            let second = FsPersistence.load(&path).unwrap().buffer;
            assert_eq!(first, second, "round trip mismatch for {text:?}");
        }
    }
}
