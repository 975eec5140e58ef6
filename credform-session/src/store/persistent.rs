use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{KeyValueStore, StoreScope};
use crate::error::SessionError;

const STORE_FILE: &str = "storage.json";

/// File-backed store: one JSON object under the user cache directory
pub struct PersistentStore {
    store_path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl PersistentStore {
    pub fn new() -> Result<Self, SessionError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| SessionError::Configuration("Could not find cache directory".to_string()))?
            .join("credform");

        Self::in_dir(cache_dir)
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();

        // Create the directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                SessionError::Storage(format!("Failed to create storage directory: {}", e))
            })?;
        }

        Ok(Self {
            store_path: dir.join(STORE_FILE),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SessionError> {
        if !self.store_path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.store_path)
            .map_err(|e| SessionError::Storage(format!("Failed to read store: {}", e)))?;

        Ok(serde_json::from_str(&json)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(entries)?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner read/write only from creation, the file holds access tokens
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.store_path)
            .map_err(|e| SessionError::Storage(format!("Failed to open store: {}", e)))?;

        // `mode` only applies on creation; tighten a file left by older runs
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| {
                    SessionError::Storage(format!("Failed to set file permissions: {}", e))
                })?;
        }

        file.write_all(json.as_bytes())
            .map_err(|e| SessionError::Storage(format!("Failed to write store: {}", e)))?;

        Ok(())
    }
}

impl KeyValueStore for PersistentStore {
    fn scope(&self) -> StoreScope {
        StoreScope::Persisted
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| SessionError::Storage("persistent store lock poisoned".to_string()))?;

        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)?;

        tracing::debug!("Persisted {} to {}", key, self.store_path.display());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.read_all()?.remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();

        let store = PersistentStore::in_dir(dir.path()).unwrap();
        store.set("token", "T1").unwrap();
        store.set("other", "x").unwrap();
        drop(store);

        let reopened = PersistentStore::in_dir(dir.path()).unwrap();
        assert_eq!(reopened.get("token").unwrap(), Some("T1".to_string()));
        assert_eq!(reopened.get("other").unwrap(), Some("x".to_string()));
        assert_eq!(reopened.get("missing").unwrap(), None);
        assert_eq!(reopened.scope(), StoreScope::Persisted);
    }

    #[test]
    fn creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = PersistentStore::in_dir(&nested).unwrap();
        store.set("token", "").unwrap();

        assert!(nested.join(STORE_FILE).exists());
        assert_eq!(store.get("token").unwrap(), Some(String::new()));
    }

    #[cfg(unix)]
    #[test]
    fn store_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = PersistentStore::in_dir(dir.path()).unwrap();
        store.set("token", "T1").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn existing_readable_file_is_tightened_before_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = PersistentStore::in_dir(dir.path()).unwrap();
        store.set("token", "T1").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.get("token").unwrap(), Some("T1".to_string()));
    }

    #[test]
    fn corrupt_file_surfaces_json_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE), "not json").unwrap();

        let store = PersistentStore::in_dir(dir.path()).unwrap();
        assert!(matches!(store.get("token"), Err(SessionError::Json(_))));
    }
}
