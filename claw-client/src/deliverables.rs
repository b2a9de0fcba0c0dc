//! Deliverable submission endpoint

use crate::MarketplaceClient;
use crate::error::Result;
use claw_core::domain::deliverable::Deliverable;
use reqwest::Method;

impl MarketplaceClient {
    /// Submit finished work for an accepted gig
    ///
    /// Any 2xx answer counts as accepted by the marketplace; the response
    /// body is ignored.
    pub async fn submit_deliverable(&self, deliverable: &Deliverable) -> Result<()> {
        let response = self
            .request(Method::POST, &["deliverables"])?
            .json(deliverable)
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
