//! Fulfiller
//!
//! Drives a gig from application to submitted deliverable:
//! - Applying to the selected gig
//! - Checking which applications have been accepted
//! - Producing and submitting a deliverable for each accepted one
//!
//! Failures while applying or submitting are absorbed and reported in the
//! result. Only a transport failure on the application listing is returned
//! as an error.

use claw_core::domain::application::Application;
use claw_core::domain::deliverable::Deliverable;
use claw_core::domain::gig::Gig;
use claw_core::domain::identity::Identity;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::CycleError;
use crate::repository::MarketplaceRepository;
use crate::service::work::WorkService;

/// Result of applying to a gig
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// A new application was created
    Applied { gig_title: String },
    /// An application already existed (409); nothing left to do
    AlreadyApplied,
    /// The marketplace refused the application for this gig
    Rejected { status: u16 },
    /// The request never got an answer, or the answer did not decode
    Failed { reason: String },
}

/// Tally of one pass over the accepted applications
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FulfilmentReport {
    /// Accepted applications seen
    pub accepted: usize,
    /// Deliverables the marketplace took
    pub submitted: usize,
    /// Deliverables the marketplace refused or never acknowledged
    pub failed: usize,
    /// Accepted applications with no gig to deliver against
    pub skipped: usize,
}

pub struct Fulfiller {
    repo: Arc<dyn MarketplaceRepository>,
    work: Arc<dyn WorkService>,
}

impl Fulfiller {
    pub fn new(repo: Arc<dyn MarketplaceRepository>, work: Arc<dyn WorkService>) -> Self {
        Self { repo, work }
    }

    /// Applies to a gig
    ///
    /// A 409 means the application already exists, which is the state we
    /// wanted, so it is reported as [`ApplyOutcome::AlreadyApplied`].
    pub async fn apply(&self, gig_id: &str, proposal: Option<String>) -> ApplyOutcome {
        match self.repo.apply(gig_id, proposal).await {
            Ok(response) => {
                info!("Applied to gig: {}", response.application.gig_title);
                ApplyOutcome::Applied {
                    gig_title: response.application.gig_title,
                }
            }
            Err(e) if e.is_conflict() => {
                info!("Already applied to gig {}", gig_id);
                ApplyOutcome::AlreadyApplied
            }
            Err(e) => {
                error!("Application to gig {} failed: {}", gig_id, e);
                match e.status() {
                    Some(status) => ApplyOutcome::Rejected { status },
                    None => ApplyOutcome::Failed {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// Lists every application of this agent
    ///
    /// # Returns
    /// An empty list when the marketplace answers with an error status
    pub async fn list_applications(&self) -> Result<Vec<Application>, CycleError> {
        match self.repo.list_applications().await {
            Ok(list) => {
                info!(
                    "Applications: {} total, {} accepted, {} pending",
                    list.stats.total, list.stats.accepted, list.stats.pending
                );
                Ok(list.applications)
            }
            Err(e) if e.is_transport() => Err(CycleError::ListApplications(e)),
            Err(e) => {
                warn!("Failed to fetch applications: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Produces the deliverable for `gig`
    pub async fn do_work(&self, gig: &Gig, identity: &Identity) -> Deliverable {
        self.work.do_work(gig, identity).await
    }

    /// Submits a deliverable once
    ///
    /// # Returns
    /// `false` when the submission was refused or never acknowledged
    pub async fn submit(&self, deliverable: &Deliverable) -> bool {
        match self.repo.submit_deliverable(deliverable).await {
            Ok(()) => {
                info!("Deliverable submitted for gig {}", deliverable.gig_id);
                true
            }
            Err(e) => {
                error!("Submission for gig {} failed: {}", deliverable.gig_id, e);
                false
            }
        }
    }

    /// Works on and submits every accepted application in `applications`
    ///
    /// Nothing is remembered between calls: an application that stays
    /// accepted is fulfilled again on every pass, unless the marketplace
    /// moves it on once a deliverable arrives.
    pub async fn fulfil_accepted(
        &self,
        identity: &Identity,
        applications: &[Application],
    ) -> FulfilmentReport {
        let mut report = FulfilmentReport::default();

        for application in applications.iter().filter(|a| a.is_accepted()) {
            report.accepted += 1;

            let Some(gig) = application.gig.as_ref().filter(|g| !g.id.is_empty()) else {
                warn!(
                    "Accepted application for gig '{}' carries no gig snapshot, skipping",
                    application.gig_id
                );
                report.skipped += 1;
                continue;
            };

            info!("Gig accepted, working on: {}", gig.title);
            let deliverable = self.do_work(gig, identity).await;

            if self.submit(&deliverable).await {
                report.submitted += 1;
            } else {
                report.failed += 1;
            }
        }

        report
    }
}
