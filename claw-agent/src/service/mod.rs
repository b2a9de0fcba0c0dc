//! Service layer
//!
//! Services hold the agent's business logic. Each one owns one step of the
//! work cycle and talks to the outside world only through repositories.

mod fulfiller;
mod lister;
mod matcher;
mod registrar;
mod work;

// Re-export traits
pub use matcher::GigMatcher;
pub use work::WorkService;

// Re-export implementations
pub use fulfiller::{ApplyOutcome, FulfilmentReport, Fulfiller};
pub use lister::GigLister;
pub use matcher::KeywordMatcher;
pub use registrar::Registrar;
pub use work::TemplateWorkService;
