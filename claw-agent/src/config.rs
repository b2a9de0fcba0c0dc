//! Agent configuration
//!
//! One immutable value describing who the agent is and how it paces itself.
//! Built once at startup and handed to every component that needs it.

use std::path::PathBuf;
use std::time::Duration;

/// Default marketplace API root
pub const DEFAULT_BASE_URL: &str = "https://claw-jobs.com/api";

/// Capabilities advertised when none are configured
pub const DEFAULT_CAPABILITIES: [&str; 4] = ["research", "writing", "summarization", "data-analysis"];

/// Default location of the persisted credential record
pub const DEFAULT_STATE_FILE: &str = "agent_state.json";

/// Agent configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Marketplace API root (e.g., "https://claw-jobs.com/api")
    pub base_url: String,

    /// Capabilities advertised at registration and used for gig matching, in priority order
    pub capabilities: Vec<String>,

    /// Display name used when registering
    pub display_name: String,

    /// Lightning address payouts go to
    pub lightning_address: Option<String>,

    /// Pause between cycles in continuous mode
    pub cycle_interval: Duration,

    /// Simulated time spent producing each deliverable
    pub work_delay: Duration,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,

    /// Where the credential record is persisted
    pub state_file: PathBuf,
}

impl Config {
    /// Creates a new configuration with defaults for everything but identity
    pub fn new(display_name: String, capabilities: Vec<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            capabilities,
            display_name,
            lightning_address: None,
            cycle_interval: Duration::from_secs(300),
            work_delay: Duration::from_secs(2),
            request_timeout: Duration::from_secs(30),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }

    /// Sets the payout address, treating an empty string as unset
    pub fn with_lightning_address(mut self, address: Option<String>) -> Self {
        self.lightning_address = address.filter(|a| !a.trim().is_empty());
        self
    }

    /// Profile text sent at registration
    pub fn bio(&self) -> String {
        format!(
            "I'm an agent that can help with {}.",
            self.capabilities.join(", ")
        )
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.display_name.trim().is_empty() {
            anyhow::bail!("display_name cannot be empty");
        }

        if self.capabilities.is_empty() {
            anyhow::bail!("at least one capability is required");
        }

        // An empty keyword is a substring of every gig and would match anything
        if self.capabilities.iter().any(|c| c.trim().is_empty()) {
            anyhow::bail!("capabilities cannot contain empty entries");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.cycle_interval.is_zero() {
            anyhow::bail!("cycle_interval must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            generate_display_name(),
            DEFAULT_CAPABILITIES.iter().map(|c| c.to_string()).collect(),
        )
    }
}

/// Generates `ExampleAgent-xxxx` with a random lowercase alphanumeric suffix
pub fn generate_display_name() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("ExampleAgent-{}", &suffix[..4])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.capabilities.len(), 4);
        assert_eq!(config.cycle_interval, Duration::from_secs(300));
        assert_eq!(config.work_delay, Duration::from_secs(2));
        assert!(config.lightning_address.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_name_shape() {
        let name = generate_display_name();
        let suffix = name.strip_prefix("ExampleAgent-").unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.base_url = "claw-jobs.com".to_string();
        assert!(config.validate().is_err());
        config.base_url = DEFAULT_BASE_URL.to_string();

        config.capabilities.push("  ".to_string());
        assert!(config.validate().is_err());
        config.capabilities.clear();
        assert!(config.validate().is_err());
        config.capabilities = vec!["writing".to_string()];

        config.cycle_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.cycle_interval = Duration::from_secs(60);

        config.display_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_lightning_address_is_unset() {
        let config = Config::default().with_lightning_address(Some(String::new()));
        assert!(config.lightning_address.is_none());

        let config = Config::default().with_lightning_address(Some("agent@getalby.com".to_string()));
        assert_eq!(config.lightning_address.as_deref(), Some("agent@getalby.com"));
    }

    #[test]
    fn test_bio_lists_capabilities() {
        let config = Config::new("a".to_string(), vec!["research".to_string(), "writing".to_string()]);
        assert_eq!(config.bio(), "I'm an agent that can help with research, writing.");
    }
}
