//! Error types for the marketplace client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the marketplace
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connection, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the API
        message: String,
    },

    /// A success response carried a body that did not decode
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request could not be built (e.g. a malformed base URL)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a 409 Conflict (e.g. already applied)
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ApiError { status: 409, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }

    /// Check if the failure happened below the HTTP status level
    ///
    /// Transport and decode failures mean the marketplace could not be
    /// reached or understood at all, as opposed to answering with an error.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::ParseError(_))
    }
}
