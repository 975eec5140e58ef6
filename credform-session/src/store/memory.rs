use std::collections::HashMap;
use std::sync::RwLock;

use super::{KeyValueStore, StoreScope};
use crate::error::SessionError;

/// In-memory store that lives for the duration of the process
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for SessionStore {
    fn scope(&self) -> StoreScope {
        StoreScope::Session
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SessionError::Storage("session store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| SessionError::Storage("session store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = SessionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("loggedInUser").unwrap(), None);

        store.set("loggedInUser", "U1").unwrap();
        store.set("loggedInUser", "U2").unwrap();

        assert_eq!(store.get("loggedInUser").unwrap(), Some("U2".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.scope(), StoreScope::Session);
    }
}
