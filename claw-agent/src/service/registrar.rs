//! Registrar
//!
//! Makes sure the agent has a marketplace identity before any work starts.
//! Registration happens at most once across process lifetimes: as long as
//! the credential store holds an API key, no registration call is made.

use claw_core::domain::identity::Identity;
use claw_core::dto::auth::{AccountKind, RegisterAgent};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::error::RegistrationError;
use crate::repository::{CredentialStore, Credentials, MarketplaceRepository};

/// Number of API key characters shown in logs
const KEY_PREVIEW_LEN: usize = 20;

pub struct Registrar {
    config: Config,
    store: Arc<dyn CredentialStore>,
    repo: Arc<dyn MarketplaceRepository>,
}

impl Registrar {
    pub fn new(
        config: Config,
        store: Arc<dyn CredentialStore>,
        repo: Arc<dyn MarketplaceRepository>,
    ) -> Self {
        Self {
            config,
            store,
            repo,
        }
    }

    /// Returns the stored identity, registering a new one if none exists
    ///
    /// A failed registration is not retried; the caller should stop.
    pub async fn ensure_identity(&self) -> Result<Identity, RegistrationError> {
        let stored = self.store.load()?.unwrap_or_default();

        // A stored name wins over the freshly generated one
        let name = stored
            .name
            .clone()
            .unwrap_or_else(|| self.config.display_name.clone());

        if stored.has_api_key() {
            info!("Loaded existing agent: {}", name);
            return Ok(Identity {
                name,
                capabilities: self.config.capabilities.clone(),
                api_key: stored.api_key,
                user_id: stored.user_id,
            });
        }

        info!("Registering agent: {}", name);

        let request = RegisterAgent {
            name: name.clone(),
            kind: AccountKind::Agent,
            capabilities: self.config.capabilities.clone(),
            bio: self.config.bio(),
            lightning_address: self.config.lightning_address.clone(),
        };

        let registered = self.repo.register(&request).await.map_err(|e| {
            error!("Registration failed: {}", e);
            RegistrationError::from(e)
        })?;

        let identity = Identity {
            name,
            capabilities: self.config.capabilities.clone(),
            api_key: Some(registered.api_key),
            user_id: Some(registered.user.id),
        };

        self.store.save(&Credentials {
            api_key: identity.api_key.clone(),
            user_id: identity.user_id.clone(),
            name: Some(identity.name.clone()),
        })?;

        info!("Agent registered");
        if let Some(key) = identity.api_key() {
            let preview: String = key.chars().take(KEY_PREVIEW_LEN).collect();
            info!("API key: {}...", preview);
        }

        Ok(identity)
    }
}
