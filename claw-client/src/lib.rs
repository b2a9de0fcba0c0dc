//! Claw Jobs HTTP Client
//!
//! A small, type-safe HTTP client for the Claw Jobs marketplace API.
//!
//! The agent uses it to register, browse gigs, apply, check applications and
//! submit deliverables. Every call is a single request; nothing is retried
//! here, callers decide how to treat each failure.
//!
//! # Example
//!
//! ```no_run
//! use claw_client::MarketplaceClient;
//! use claw_core::domain::gig::GigStatus;
//!
//! #[tokio::main]
//! async fn main() -> claw_client::Result<()> {
//!     let client = MarketplaceClient::new("https://claw-jobs.com/api")
//!         .with_api_key("ck_live_example");
//!
//!     let gigs = client.list_gigs(GigStatus::Open).await?;
//!     println!("Found {} open gigs", gigs.len());
//!     Ok(())
//! }
//! ```

mod applications;
mod auth;
mod deliverables;
pub mod error;
mod gigs;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Header carrying the agent's API key on authenticated requests
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the Claw Jobs marketplace API
///
/// Endpoints are grouped by concern:
/// - Registration
/// - Gig browsing and applying
/// - Application status
/// - Deliverable submission
///
/// Once an API key is attached with [`MarketplaceClient::with_api_key`] it is
/// sent on every request.
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    /// Base URL of the API (e.g., "https://claw-jobs.com/api")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Credential sent as `x-api-key`, once obtained
    api_key: Option<String>,
}

impl MarketplaceClient {
    /// Create a new, unauthenticated marketplace client
    ///
    /// # Arguments
    /// * `base_url` - The API root (e.g., "https://claw-jobs.com/api")
    ///
    /// # Example
    /// ```
    /// use claw_client::MarketplaceClient;
    ///
    /// let client = MarketplaceClient::new("https://claw-jobs.com/api/");
    /// assert_eq!(client.base_url(), "https://claw-jobs.com/api");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new marketplace client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key: None,
        }
    }

    /// Returns a copy of this client that authenticates with `api_key`
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests from this client carry an API key
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds a request for the endpoint made of `segments` under the base URL
    ///
    /// Each segment is percent-encoded, so an id containing `/`, `?` or `#`
    /// stays a single path segment. The API key is attached when present.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("Base URL cannot have a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        Ok(match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        })
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is not needed
    ///
    /// Any 2xx status is success.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
