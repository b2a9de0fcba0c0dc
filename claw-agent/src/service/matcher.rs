//! Gig matching
//!
//! Picks one gig out of a listing for the agent to apply to. The heuristic
//! is greedy: the first acceptable gig wins and any gig beats no gig.

use claw_core::domain::gig::Gig;
use tracing::debug;

/// Strategy for choosing which gig to apply to
pub trait GigMatcher: Send + Sync {
    /// Selects a gig from `gigs` for an agent with `capabilities`
    ///
    /// # Returns
    /// `None` only when `gigs` is empty
    fn select<'a>(&self, gigs: &'a [Gig], capabilities: &[String]) -> Option<&'a Gig>;
}

/// Case-insensitive capability keyword matcher
///
/// Passes over the listing in order:
/// 1. a capability appears in the gig's category or required capabilities
/// 2. a capability appears in the gig's title or description
/// 3. otherwise the first gig listed
///
/// A pass-1 match anywhere in the listing beats a pass-2 match earlier in it.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    pub fn new() -> Self {
        Self
    }

    fn matches_tags(gig: &Gig, keywords: &[String]) -> bool {
        let category = gig.category.to_lowercase();
        let required = gig.required_capabilities.join(", ").to_lowercase();
        keywords
            .iter()
            .any(|k| category.contains(k.as_str()) || required.contains(k.as_str()))
    }

    fn matches_text(gig: &Gig, keywords: &[String]) -> bool {
        let text = format!("{} {}", gig.title, gig.description).to_lowercase();
        keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

impl GigMatcher for KeywordMatcher {
    fn select<'a>(&self, gigs: &'a [Gig], capabilities: &[String]) -> Option<&'a Gig> {
        let keywords: Vec<String> = capabilities.iter().map(|c| c.to_lowercase()).collect();

        if let Some(gig) = gigs.iter().find(|g| Self::matches_tags(g, &keywords)) {
            debug!("Gig {} matched on category/capabilities", gig.id);
            return Some(gig);
        }

        if let Some(gig) = gigs.iter().find(|g| Self::matches_text(g, &keywords)) {
            debug!("Gig {} matched on title/description", gig.id);
            return Some(gig);
        }

        let fallback = gigs.first();
        if let Some(gig) = fallback {
            debug!("No capability match, falling back to first gig {}", gig.id);
        }
        fallback
    }
}
