//! Gig domain types

use serde::{Deserialize, Deserializer, Serialize};

/// A unit of posted work on the marketplace
///
/// Read-only to the agent: the marketplace owns every field and the agent
/// only sees snapshots returned by listings or embedded in applications.
/// Missing or `null` fields fall back to their defaults so one sparse
/// snapshot cannot fail a whole listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gig {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required_capabilities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub budget_sats: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: GigStatus,
}

/// Deserializes `null` as the type's default value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Gig lifecycle status as reported by the marketplace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GigStatus {
    #[default]
    Open,
    Applied,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
    /// Any status this client does not know about yet
    #[serde(other)]
    Other,
}

impl GigStatus {
    /// The value used for the `status` query filter
    pub fn as_str(&self) -> &'static str {
        match self {
            GigStatus::Open => "open",
            GigStatus::Applied => "applied",
            GigStatus::Accepted => "accepted",
            GigStatus::InProgress => "in_progress",
            GigStatus::Completed => "completed",
            GigStatus::Cancelled => "cancelled",
            GigStatus::Other => "other",
        }
    }
}

impl std::fmt::Display for GigStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
