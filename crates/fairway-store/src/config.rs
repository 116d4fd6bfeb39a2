//! Store connection configuration from the environment.

use fairway_core::{Error, Result};

/// Endpoint URL of the remote store.
pub const ENV_STORE_URL: &str = "FAIRWAY_STORE_URL";

/// Access key sent as `apikey` and bearer token.
pub const ENV_STORE_KEY: &str = "FAIRWAY_STORE_KEY";

/// Optional per-request timeout override (seconds).
pub const ENV_STORE_TIMEOUT_SECS: &str = "FAIRWAY_STORE_TIMEOUT_SECS";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Create a configuration with the default timeout.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from environment variables.
    ///
    /// Both credentials are required; a missing one is a startup-fatal
    /// [`Error::Config`] so the caller can abort before any work.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ENV_STORE_URL)
            .map_err(|_| Error::Config(format!("{ENV_STORE_URL} is not set")))?;
        let key = std::env::var(ENV_STORE_KEY)
            .map_err(|_| Error::Config(format!("{ENV_STORE_KEY} is not set")))?;
        let timeout_secs = std::env::var(ENV_STORE_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            url,
            key,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race a parallel test.
    #[test]
    fn test_from_env_round_trip_and_missing() {
        std::env::remove_var(ENV_STORE_URL);
        std::env::remove_var(ENV_STORE_KEY);

        match StoreConfig::from_env() {
            Err(Error::Config(msg)) => assert!(msg.contains(ENV_STORE_URL)),
            other => panic!("expected Config error, got {other:?}"),
        }

        std::env::set_var(ENV_STORE_URL, "https://store.example");
        std::env::set_var(ENV_STORE_KEY, "secret");
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.url, "https://store.example");
        assert_eq!(config.key, "secret");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        std::env::remove_var(ENV_STORE_URL);
        std::env::remove_var(ENV_STORE_KEY);
    }
}
