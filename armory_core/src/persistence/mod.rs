//! Persistence - durable storage for saved loadouts and the agent profile
//!
//! The engine only needs load-on-start and save-on-change; where the bytes go
//! is up to the [`Storage`] implementation.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::loadout::Loadout;
use crate::profile::AgentProfile;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that survives a restart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub saved_loadouts: Vec<Loadout>,
    #[serde(default)]
    pub agent_profile: AgentProfile,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        PersistedState {
            saved_loadouts: Vec::new(),
            agent_profile: AgentProfile::default(),
            dark_mode: default_dark_mode(),
        }
    }
}

fn default_dark_mode() -> bool {
    true
}

/// Errors that can occur while loading or saving state
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored state is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage backend for [`PersistedState`]
pub trait Storage {
    /// Read the stored state; `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError>;

    /// Replace the stored state
    fn save(&mut self, state: &PersistedState) -> Result<(), PersistenceError>;
}

/// Storage that never keeps anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorage;

impl Storage for NullStorage {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        Ok(None)
    }

    fn save(&mut self, _state: &PersistedState) -> Result<(), PersistenceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert!(state.saved_loadouts.is_empty());
        assert!(state.dark_mode);
        assert_eq!(state.agent_profile, AgentProfile::default());
    }

    #[test]
    fn test_null_storage() {
        let mut storage = NullStorage;
        storage.save(&PersistedState::default()).unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
