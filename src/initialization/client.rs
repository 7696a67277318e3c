//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the fetch façade.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config (covers connect, send, and body read)
/// - reqwest's default redirect policy (up to 10 hops)
///
/// # Errors
///
/// Returns `InitializationError::InvalidConfig` if the config fails
/// validation, or `InitializationError::HttpClientError` if client creation
/// fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    config.validate()?;
    Ok(build_client(config)?)
}

/// Builds the client without validating `config` first.
///
/// Only for configs known to be valid, such as `Config::default()`.
pub(crate) fn build_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_build_client_default_config() {
        assert!(build_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_rejects_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        match init_client(&config) {
            Err(InitializationError::InvalidConfig(e)) => assert_eq!(e.field, "timeout_seconds"),
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }
}
