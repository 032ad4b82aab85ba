//! Configuration module
//!
//! Resolved CLI configuration: credentials, endpoint, model, and run-wait
//! parameters shared by all commands.

use std::time::Duration;

use scribe_client::{OpenAiClient, RunPoller};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential sent as a bearer token
    pub api_key: String,
    /// Base URL of the vendor API
    pub base_url: String,
    /// Model for chat completions and newly created assistants
    pub model: String,
    /// Pause between run status fetches
    pub poll_interval: Duration,
    /// Upper bound on the total time spent waiting for a run
    pub timeout: Duration,
}

impl Config {
    /// Builds the API client for this configuration
    pub fn client(&self) -> OpenAiClient {
        OpenAiClient::with_base_url(&self.api_key, &self.base_url)
    }

    /// Builds the run poller for this configuration
    ///
    /// Always bounded: an indefinitely running remote job must not poll
    /// forever.
    pub fn poller(&self) -> RunPoller {
        RunPoller::new()
            .with_interval(self.poll_interval)
            .with_deadline(self.timeout)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("api key cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        if self.timeout < self.poll_interval {
            anyhow::bail!("timeout must be at least the poll interval");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            api_key: "sk-test".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4-turbo-preview".to_string(),
            poll_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(300),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();

        config.api_key = String::new();
        assert!(config.validate().is_err());
        config.api_key = "sk-test".to_string();

        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.base_url = "http://localhost:8080".to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_secs(10);

        config.timeout = Duration::from_secs(5);
        assert!(config.validate().is_err());

        config.timeout = Duration::from_secs(30);
        assert!(config.validate().is_ok());
    }
}
