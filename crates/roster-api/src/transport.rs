// Shared transport configuration for building reqwest::Client instances.

use std::time::Duration;

/// Transport settings applied to every HTTP client this crate builds.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()?)
    }
}
