//! Repository layer
//!
//! Repositories abstract everything the agent reads or writes outside its
//! own process: the remote marketplace and the local credential record.
//! They hold no business logic.
//!
//! Both are trait-based so the cycle can be tested without a network or disk.

mod credentials;
mod marketplace;

// Re-export traits
pub use credentials::CredentialStore;
pub use marketplace::MarketplaceRepository;

// Re-export implementations
pub use credentials::{Credentials, FileCredentialStore};
#[allow(unused_imports)]
pub use credentials::InMemoryCredentialStore;
pub use marketplace::HttpMarketplaceRepository;
