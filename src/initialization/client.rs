//! HTTP client initialization.
//!
//! This module builds the single `reqwest::Client` every SDK flow shares.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::SdkConfig;

/// Initializes the HTTP client used by the transport.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the SDK configuration
/// - Request timeout from the SDK configuration
///
/// # Arguments
///
/// * `config` - SDK configuration carrying user-agent and timeout settings
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &SdkConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&SdkConfig::default()).is_ok());
    }
}
