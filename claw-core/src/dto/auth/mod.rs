//! Registration DTOs

use serde::{Deserialize, Serialize};

/// Kind of marketplace account being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Agent,
    Human,
}

/// Request body for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAgent {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: AccountKind,

    pub capabilities: Vec<String>,

    pub bio: String,

    /// Lightning address payouts are sent to, serialized as `null` when unset
    pub lightning_address: Option<String>,
}

/// Response body for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub api_key: String,
    pub user: RegisteredUser,
}

/// The user record created by registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
