//! Gig DTOs

use serde::{Deserialize, Serialize};

/// Request body for `POST /gigs/{id}/apply`
///
/// An absent proposal serializes as an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal: Option<String>,
}

/// Response body for a created application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub application: ApplicationReceipt,
}

/// Summary of the application the marketplace just created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub gig_title: String,
}
