//! Marketplace repository
//!
//! Handles communication with the Claw Jobs API:
//! - Registering the agent
//! - Listing gigs and applying to them
//! - Listing this agent's applications
//! - Submitting deliverables

use async_trait::async_trait;
use claw_client::{MarketplaceClient, Result};
use claw_core::domain::deliverable::Deliverable;
use claw_core::domain::gig::{Gig, GigStatus};
use claw_core::dto::application::ApplicationList;
use claw_core::dto::auth::{RegisterAgent, RegisterResponse};
use claw_core::dto::gig::ApplyResponse;

/// Repository trait for marketplace operations
///
/// Each method is one request attempted exactly once. Errors keep their
/// [`ClientError`](claw_client::ClientError) classification so callers can
/// tell an error status from a transport failure.
#[async_trait]
pub trait MarketplaceRepository: Send + Sync {
    /// Registers a new agent account
    async fn register(&self, req: &RegisterAgent) -> Result<RegisterResponse>;

    /// Lists gigs in the given state
    async fn list_gigs(&self, status: GigStatus) -> Result<Vec<Gig>>;

    /// Applies to a gig
    ///
    /// # Arguments
    /// * `gig_id` - The gig to apply to
    /// * `proposal` - Optional pitch sent with the application
    async fn apply(&self, gig_id: &str, proposal: Option<String>) -> Result<ApplyResponse>;

    /// Lists every application of this agent with aggregate counts
    async fn list_applications(&self) -> Result<ApplicationList>;

    /// Submits a deliverable
    async fn submit_deliverable(&self, deliverable: &Deliverable) -> Result<()>;
}

/// HTTP implementation of MarketplaceRepository
pub struct HttpMarketplaceRepository {
    client: MarketplaceClient,
}

impl HttpMarketplaceRepository {
    /// Creates a new HTTP marketplace repository
    ///
    /// # Arguments
    /// * `client` - Marketplace client, authenticated or not
    pub fn new(client: MarketplaceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MarketplaceRepository for HttpMarketplaceRepository {
    async fn register(&self, req: &RegisterAgent) -> Result<RegisterResponse> {
        self.client.register(req).await
    }

    async fn list_gigs(&self, status: GigStatus) -> Result<Vec<Gig>> {
        self.client.list_gigs(status).await
    }

    async fn apply(&self, gig_id: &str, proposal: Option<String>) -> Result<ApplyResponse> {
        self.client.apply_to_gig(gig_id, proposal).await
    }

    async fn list_applications(&self) -> Result<ApplicationList> {
        self.client.list_applications().await
    }

    async fn submit_deliverable(&self, deliverable: &Deliverable) -> Result<()> {
        self.client.submit_deliverable(deliverable).await
    }
}
