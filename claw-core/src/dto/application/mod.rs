//! Application listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::application::Application;

/// Response body for `GET /applications`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationList {
    pub applications: Vec<Application>,
    pub stats: ApplicationStats,
}

/// Aggregate counts over all of this agent's applications
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationStats {
    pub total: u64,
    pub accepted: u64,
    pub pending: u64,
}
