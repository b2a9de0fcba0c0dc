//! Credential store
//!
//! Persists the single record `{api_key, user_id, name}` that lets later
//! runs skip registration. Read once at startup, written at most once.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;

/// The persisted credential record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub user_id: Option<String>,
    pub name: Option<String>,
}

impl Credentials {
    /// Whether the record holds a non-empty API key
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

/// Storage for the agent's credential record
pub trait CredentialStore: Send + Sync {
    /// Loads the stored record
    ///
    /// # Returns
    /// `None` when nothing has been stored yet
    fn load(&self) -> Result<Option<Credentials>, StoreError>;

    /// Replaces the stored record
    fn save(&self, credentials: &Credentials) -> Result<(), StoreError>;
}

/// JSON file implementation of CredentialStore
///
/// A missing file means "not registered yet".
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credentials>, StoreError> {
        if !self.path.exists() {
            debug!("No credential file at {}", self.path.display());
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let credentials = serde_json::from_str(&raw)?;
        Ok(Some(credentials))
    }

    fn save(&self, credentials: &Credentials) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(credentials)?;
        std::fs::write(&self.path, raw)?;
        debug!("Saved credentials to {}", self.path.display());
        Ok(())
    }
}

/// In-memory implementation of CredentialStore
#[allow(dead_code)]
#[derive(Default)]
pub struct InMemoryCredentialStore {
    record: Mutex<Option<Credentials>>,
}

#[allow(dead_code)]
impl InMemoryCredentialStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `credentials`
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            record: Mutex::new(Some(credentials)),
        }
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Result<Option<Credentials>, StoreError> {
        Ok(self.record.lock().unwrap().clone())
    }

    fn save(&self, credentials: &Credentials) -> Result<(), StoreError> {
        *self.record.lock().unwrap() = Some(credentials.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credentials {
        Credentials {
            api_key: Some("ck_live_abc".to_string()),
            user_id: Some("user-1".to_string()),
            name: Some("ExampleAgent-q9z1".to_string()),
        }
    }

    #[test]
    fn test_missing_file_is_unregistered() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("agent_state.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_persists_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent_state.json");

        FileCredentialStore::new(&path).save(&sample()).unwrap();

        // A fresh store stands in for the next process
        let loaded = FileCredentialStore::new(&path).load().unwrap().unwrap();
        assert_eq!(loaded, sample());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["api_key"], "ck_live_abc");
        assert_eq!(raw["user_id"], "user-1");
        assert_eq!(raw["name"], "ExampleAgent-q9z1");
    }

    #[test]
    fn test_partial_record_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent_state.json");
        std::fs::write(&path, r#"{"name": "Old"}"#).unwrap();

        let loaded = FileCredentialStore::new(&path).load().unwrap().unwrap();
        assert!(!loaded.has_api_key());
        assert_eq!(loaded.name.as_deref(), Some("Old"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent_state.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileCredentialStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn test_in_memory_store() {
        let store = InMemoryCredentialStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
    }
}
