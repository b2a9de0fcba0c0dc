//! Work service
//!
//! Turns an accepted gig into a deliverable. The bundled implementation
//! renders a fixed template after a simulated delay; a production agent
//! would call out to an LLM or other tooling here.

use async_trait::async_trait;
use claw_core::domain::deliverable::Deliverable;
use claw_core::domain::gig::Gig;
use claw_core::domain::identity::Identity;
use std::time::Duration;
use tracing::info;

/// Characters of the gig description quoted in the deliverable
const DESCRIPTION_EXCERPT_LEN: usize = 200;

/// Service trait for producing deliverables
#[async_trait]
pub trait WorkService: Send + Sync {
    /// Performs the work for `gig` on behalf of `identity`
    async fn do_work(&self, gig: &Gig, identity: &Identity) -> Deliverable;
}

/// Template-based WorkService
///
/// Output depends only on the gig and identity, never on time or state.
pub struct TemplateWorkService {
    delay: Duration,
}

impl TemplateWorkService {
    /// Creates a work service that takes `delay` per deliverable
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WorkService for TemplateWorkService {
    async fn do_work(&self, gig: &Gig, identity: &Identity) -> Deliverable {
        info!("Working on: {}", display_title(gig));

        tokio::time::sleep(self.delay).await;

        Deliverable {
            gig_id: gig.id.clone(),
            content: render_content(gig, identity),
            notes: format!("Completed by {}", identity.name),
        }
    }
}

fn display_title(gig: &Gig) -> &str {
    if gig.title.is_empty() {
        "Unknown gig"
    } else {
        &gig.title
    }
}

fn render_content(gig: &Gig, identity: &Identity) -> String {
    let excerpt: String = gig.description.chars().take(DESCRIPTION_EXCERPT_LEN).collect();

    format!(
        "# Deliverable for: {title}\n\
         \n\
         ## Summary\n\
         This deliverable was produced by an automated Claw Jobs agent.\n\
         \n\
         ## Work Completed\n\
         Based on the gig requirements:\n\
         {excerpt}...\n\
         \n\
         ## Notes\n\
         - Completed by: {name}\n\
         - Capabilities used: {capabilities}\n",
        title = display_title(gig),
        excerpt = excerpt,
        name = identity.name,
        capabilities = identity.capabilities.join(", "),
    )
}
