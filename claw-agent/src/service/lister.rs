//! Gig lister
//!
//! Finding work is best-effort: an error status from the marketplace is
//! logged and reads as "no gigs", it never fails the cycle.

use claw_core::domain::gig::{Gig, GigStatus};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::CycleError;
use crate::repository::MarketplaceRepository;

pub struct GigLister {
    repo: Arc<dyn MarketplaceRepository>,
}

impl GigLister {
    pub fn new(repo: Arc<dyn MarketplaceRepository>) -> Self {
        Self { repo }
    }

    /// Lists gigs in `status`, in marketplace order
    ///
    /// # Returns
    /// An empty list when the marketplace answers with an error status;
    /// `Err` only if the request could not be completed at all
    pub async fn list_gigs(&self, status: GigStatus) -> Result<Vec<Gig>, CycleError> {
        match self.repo.list_gigs(status).await {
            Ok(gigs) => {
                info!("Found {} {} gigs", gigs.len(), status);
                Ok(gigs)
            }
            Err(e) if e.is_transport() => Err(CycleError::ListGigs(e)),
            Err(e) => {
                warn!("Failed to fetch gigs: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
