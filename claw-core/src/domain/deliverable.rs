//! Deliverable domain types

use serde::{Deserialize, Serialize};

/// Work product submitted for an accepted application
///
/// Built fresh for every submission and not retained afterwards. Serializes
/// directly as the body of `POST /deliverables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    pub gig_id: String,
    pub content: String,
    pub notes: String,
}
