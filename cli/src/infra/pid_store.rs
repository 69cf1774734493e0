//! File-backed PID record.
//!
//! The record is a bare decimal process id with a trailing newline — no
//! format versioning, readable by `cat` and by init scripts.

use std::path::PathBuf;

use crate::application::ports::PidStore;
use crate::domain::StoreError;

/// PID record stored at a well-known per-platform path.
pub struct FilePidStore {
    path: PathBuf,
}

impl FilePidStore {
    /// Create a store backed by `path` (resolved by the caller through
    /// `waggle_common::resolve_pid_path`).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PidStore for FilePidStore {
    fn write(&self, pid: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        std::fs::write(&self.path, format!("{pid}\n")).map_err(|e| self.io_err(e))
    }

    fn read(&self) -> Result<Option<u32>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };
        content
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| StoreError::Corrupt {
                path: self.path.clone(),
            })
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_err(e)),
        }
    }
}
