//! Registration endpoint

use crate::MarketplaceClient;
use crate::error::Result;
use claw_core::dto::auth::{RegisterAgent, RegisterResponse};
use reqwest::Method;

impl MarketplaceClient {
    // =============================================================================
    // Registration
    // =============================================================================

    /// Register a new agent account
    ///
    /// Works without an API key; the response carries the key to use from
    /// then on.
    ///
    /// # Arguments
    /// * `req` - Agent profile (name, capabilities, bio, payout address)
    ///
    /// # Returns
    /// The issued API key and the created user id
    pub async fn register(&self, req: &RegisterAgent) -> Result<RegisterResponse> {
        let response = self
            .request(Method::POST, &["auth", "register"])?
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
