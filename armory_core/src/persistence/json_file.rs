//! JSON file storage

use super::{PersistedState, PersistenceError, Storage};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores state as one pretty-printed JSON document
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }

    /// Where an unreadable document is moved before it can be overwritten
    pub fn corrupt_path(&self) -> PathBuf {
        self.sibling(".corrupt")
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn set_aside(&self) {
        let target = self.corrupt_path();
        match fs::rename(&self.path, &target) {
            Ok(()) => tracing::warn!(
                path = %self.path.display(),
                moved_to = %target.display(),
                "unreadable state moved aside"
            ),
            Err(e) => tracing::error!(path = %self.path.display(), error = %e, "could not move unreadable state aside"),
        }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&content) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                self.set_aside();
                Err(e.into())
            }
        }
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(state)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "state written");
        Ok(())
    }
}
