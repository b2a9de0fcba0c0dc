//! Gig endpoints

use crate::MarketplaceClient;
use crate::error::Result;
use claw_core::domain::gig::{Gig, GigStatus};
use claw_core::dto::gig::{ApplyRequest, ApplyResponse};
use reqwest::Method;

impl MarketplaceClient {
    // =============================================================================
    // Gig Browsing
    // =============================================================================

    /// List gigs in the given state
    ///
    /// # Arguments
    /// * `status` - Filter sent as the `status` query parameter
    ///
    /// # Returns
    /// Gigs in the order the marketplace returned them
    pub async fn list_gigs(&self, status: GigStatus) -> Result<Vec<Gig>> {
        let response = self
            .request(Method::GET, &["gigs"])?
            .query(&[("status", status.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Applying
    // =============================================================================

    /// Apply to a gig
    ///
    /// A gig this agent already applied to answers 409; that surfaces as an
    /// [`ApiError`](crate::ClientError::ApiError) for which
    /// [`is_conflict`](crate::ClientError::is_conflict) is true.
    ///
    /// # Arguments
    /// * `gig_id` - The gig to apply to
    /// * `proposal` - Optional pitch sent with the application
    pub async fn apply_to_gig(&self, gig_id: &str, proposal: Option<String>) -> Result<ApplyResponse> {
        let response = self
            .request(Method::POST, &["gigs", gig_id, "apply"])?
            .json(&ApplyRequest { proposal })
            .send()
            .await?;

        self.handle_response(response).await
    }
}
