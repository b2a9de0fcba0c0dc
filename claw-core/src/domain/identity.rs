//! Agent identity

use serde::{Deserialize, Serialize};

/// This agent's profile and credential on the marketplace
///
/// Created on first successful registration and persisted; every later run
/// loads it instead of registering again. The API key, once obtained, is
/// reused for all requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub capabilities: Vec<String>,
    pub api_key: Option<String>,
    pub user_id: Option<String>,
}

impl Identity {
    /// Creates an identity that has not been registered yet
    pub fn unregistered(name: impl Into<String>, capabilities: Vec<String>) -> Self {
        Self {
            name: name.into(),
            capabilities,
            api_key: None,
            user_id: None,
        }
    }

    /// Returns the API key if one is present and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Whether this identity holds a usable credential
    pub fn is_registered(&self) -> bool {
        self.api_key().is_some()
    }
}
