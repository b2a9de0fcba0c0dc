//! Cycle runner
//!
//! Runs the work cycle strictly in sequence: one request at a time, no
//! background tasks. Each cycle is independent; nothing but the identity
//! carries over from the previous one.

use chrono::{DateTime, Utc};
use claw_core::domain::gig::GigStatus;
use claw_core::domain::identity::Identity;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::config::Config;
use crate::error::CycleError;
use crate::repository::MarketplaceRepository;
use crate::service::{
    ApplyOutcome, Fulfiller, FulfilmentReport, GigLister, GigMatcher, KeywordMatcher,
    TemplateWorkService, WorkService,
};

/// What one cycle did
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Open gigs listed
    pub gigs_found: usize,
    /// Gig the matcher picked, if any
    pub selected: Option<String>,
    /// Result of applying to the selected gig
    pub apply: Option<ApplyOutcome>,
    /// What happened to the accepted applications
    pub fulfilment: FulfilmentReport,
}

/// Runs work cycles for one registered identity
pub struct CycleRunner {
    identity: Identity,
    lister: GigLister,
    matcher: Arc<dyn GigMatcher>,
    fulfiller: Fulfiller,
    interval: Duration,
}

impl CycleRunner {
    /// Creates a runner with the keyword matcher and template work service
    ///
    /// # Arguments
    /// * `config` - Agent configuration (intervals and delays)
    /// * `identity` - Registered identity the cycle works for
    /// * `repo` - Marketplace repository, authenticated as `identity`
    pub fn new(config: &Config, identity: Identity, repo: Arc<dyn MarketplaceRepository>) -> Self {
        let work: Arc<dyn WorkService> = Arc::new(TemplateWorkService::new(config.work_delay));

        Self {
            identity,
            lister: GigLister::new(Arc::clone(&repo)),
            matcher: Arc::new(KeywordMatcher::new()),
            fulfiller: Fulfiller::new(repo, work),
            interval: config.cycle_interval,
        }
    }

    /// Runs one cycle: list, match, apply, check applications, fulfil
    ///
    /// Error statuses along the way only shrink what the cycle achieves, and
    /// so does any failure while applying or submitting. `Err` means one of
    /// the listings could not be fetched at all.
    pub async fn run_once(&self) -> Result<CycleOutcome, CycleError> {
        info!("{} - Running cycle", self.identity.name);
        let started_at = Utc::now();

        let gigs = self.lister.list_gigs(GigStatus::Open).await?;

        let mut selected = None;
        let mut apply = None;

        if gigs.is_empty() {
            info!("No open gigs available");
        } else if let Some(gig) = self.matcher.select(&gigs, &self.identity.capabilities) {
            info!(
                "Found matching gig: {} (budget: {} sats)",
                gig.title, gig.budget_sats
            );
            apply = Some(self.fulfiller.apply(&gig.id, None).await);
            selected = Some(gig.id.clone());
        }

        info!("Checking applications");
        let applications = self.fulfiller.list_applications().await?;
        let fulfilment = self
            .fulfiller
            .fulfil_accepted(&self.identity, &applications)
            .await;

        Ok(CycleOutcome {
            started_at,
            finished_at: Utc::now(),
            gigs_found: gigs.len(),
            selected,
            apply,
            fulfilment,
        })
    }

    /// Runs cycles back to back, sleeping the configured interval between them
    ///
    /// A failed cycle is logged and the loop moves on; it never stops the
    /// loop. With `max_cycles` set the loop returns after that many cycles,
    /// otherwise it runs until the process is stopped.
    ///
    /// # Returns
    /// The number of cycles run
    pub async fn run(&self, max_cycles: Option<usize>) -> usize {
        info!("Starting agent loop (checking every {:?})", self.interval);

        let mut cycles = 0;

        loop {
            match self.run_once().await {
                Ok(outcome) => {
                    let elapsed = outcome.finished_at - outcome.started_at;
                    let report = outcome.fulfilment;
                    info!(
                        "Cycle finished in {}ms: {} gig(s) found, selected {:?} ({:?}), {} accepted, {} submitted, {} failed, {} skipped",
                        elapsed.num_milliseconds(),
                        outcome.gigs_found,
                        outcome.selected,
                        outcome.apply,
                        report.accepted,
                        report.submitted,
                        report.failed,
                        report.skipped
                    );
                }
                Err(e) => {
                    error!("Error during cycle: {}", e);
                }
            }

            cycles += 1;
            if max_cycles.is_some_and(|max| cycles >= max) {
                return cycles;
            }

            info!("Sleeping for {:?}", self.interval);
            tokio::time::sleep(self.interval).await;
        }
    }
}
