//! Application domain types

use serde::{Deserialize, Serialize};

use crate::domain::gig::{Gig, null_as_default};

/// This agent's request to work on a gig
///
/// Created by applying to a gig; status transitions belong to the
/// marketplace (a reviewer accepts or rejects). Never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, deserialize_with = "null_as_default")]
    pub gig_id: String,
    pub status: ApplicationStatus,
    /// Snapshot of the gig at the time of listing
    #[serde(default)]
    pub gig: Option<Gig>,
}

impl Application {
    /// Whether the marketplace has accepted this application
    pub fn is_accepted(&self) -> bool {
        self.status == ApplicationStatus::Accepted
    }
}

/// Acceptance status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Accepted => write!(f, "accepted"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
            ApplicationStatus::Other => write!(f, "other"),
        }
    }
}
