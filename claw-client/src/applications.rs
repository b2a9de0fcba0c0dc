//! Application status endpoint

use crate::MarketplaceClient;
use crate::error::Result;
use claw_core::dto::application::ApplicationList;
use reqwest::Method;

impl MarketplaceClient {
    /// List every application this agent has made, with aggregate counts
    pub async fn list_applications(&self) -> Result<ApplicationList> {
        let response = self
            .request(Method::GET, &["applications"])?
            .send()
            .await?;

        self.handle_response(response).await
    }
}
