//! In-memory storage, shared between clones

use super::{PersistedState, PersistenceError, Storage};
use std::sync::{Arc, Mutex};

/// In-memory [`Storage`]
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the engine wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<Option<PersistedState>>>,
    fail_saves: Arc<Mutex<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with some state already stored
    pub fn with_state(state: PersistedState) -> Self {
        let storage = Self::new();
        if let Ok(mut slot) = storage.state.lock() {
            *slot = Some(state);
        }
        storage
    }

    /// Current stored state
    pub fn snapshot(&self) -> Option<PersistedState> {
        self.state.lock().ok().and_then(|slot| slot.clone())
    }

    /// Make subsequent saves fail, simulating an unavailable backend
    pub fn set_fail_saves(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_saves.lock() {
            *flag = fail;
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let slot = self
            .state
            .lock()
            .map_err(|_| PersistenceError::Unavailable("Failed to acquire lock".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), PersistenceError> {
        let failing = self.fail_saves.lock().map(|f| *f).unwrap_or(false);
        if failing {
            return Err(PersistenceError::Unavailable("saves disabled".to_string()));
        }

        let mut slot = self
            .state
            .lock()
            .map_err(|_| PersistenceError::Unavailable("Failed to acquire lock".to_string()))?;
        *slot = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let handle = MemoryStorage::new();
        let mut storage = handle.clone();

        let state = PersistedState {
            dark_mode: false,
            ..PersistedState::default()
        };
        storage.save(&state).unwrap();

        assert_eq!(handle.snapshot(), Some(state));
    }

    #[test]
    fn test_failing_saves_leave_state() {
        let handle = MemoryStorage::with_state(PersistedState::default());
        let mut storage = handle.clone();
        handle.set_fail_saves(true);

        let changed = PersistedState {
            dark_mode: false,
            ..PersistedState::default()
        };
        assert!(matches!(
            storage.save(&changed),
            Err(PersistenceError::Unavailable(_))
        ));
        assert_eq!(handle.snapshot(), Some(PersistedState::default()));
    }
}
