//! Agent error types
//!
//! Only failures that end a step are modelled here. Soft failures, such as
//! a listing answered with an error status or a refused submission, are
//! logged where they happen and never become errors.

use claw_client::ClientError;
use thiserror::Error;

/// Errors from reading or writing the credential store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Registration could not produce an identity; the run must stop
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The marketplace answered with a non-success status
    #[error("registration rejected (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// The marketplace could not be reached or its answer did not decode
    #[error("registration request failed: {0}")]
    Transport(#[source] ClientError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ClientError> for RegistrationError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ApiError { status, message } => Self::Rejected {
                status,
                body: message,
            },
            other => Self::Transport(other),
        }
    }
}

/// A cycle stopped before finishing
///
/// Raised only when one of the listings fails at the transport level.
/// Applying and submitting report their failures in the cycle outcome
/// instead. The continuous loop logs it and carries on with the next cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("failed to list gigs: {0}")]
    ListGigs(#[source] ClientError),

    #[error("failed to list applications: {0}")]
    ListApplications(#[source] ClientError),
}
