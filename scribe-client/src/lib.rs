//! Scribe HTTP Client
//!
//! A simple, type-safe HTTP client for the hosted AI vendor API, covering
//! the operations the summarizer needs: chat completions, file uploads,
//! assistant management, and the thread/message/run lifecycle.
//!
//! The run-polling loop lives in [`poller`] and the end-to-end
//! upload-and-summarize sequence in [`summarize`]; both are written against
//! trait seams so they can be exercised without a live API.
//!
//! # Example
//!
//! ```no_run
//! use scribe_client::OpenAiClient;
//!
//! #[tokio::main]
//! async fn main() -> scribe_client::Result<()> {
//!     let client = OpenAiClient::new(std::env::var("OPENAI_API_KEY").unwrap());
//!
//!     let thread = client.create_thread().await?;
//!     println!("Created thread: {}", thread.id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod poller;
pub mod summarize;

mod assistants;
mod chat;
mod files;
mod threads;
mod runs;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{RunOutcome, RunPoller, RunStates};
pub use summarize::{AssistantThreads, SummarizeOutcome, Summarizer};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Default production endpoint of the vendor API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Opt-in header required by the vendor for assistant/thread endpoints.
const BETA_HEADER: (&str, &str) = ("OpenAI-Beta", "assistants=v1");

/// HTTP client for the vendor API
///
/// This client provides methods for the endpoints the summarizer uses,
/// organized into logical groups:
/// - Chat completions
/// - File upload and assistant attachment
/// - Assistant management (create, list, delete)
/// - Thread/message lifecycle and runs
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    /// Base URL of the API (e.g., "https://api.openai.com/v1")
    base_url: String,
    /// API credential sent as a bearer token
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl OpenAiClient {
    /// Create a new client against the production endpoint
    ///
    /// # Arguments
    /// * `api_key` - The API credential, usually read from `OPENAI_API_KEY`
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom endpoint
    ///
    /// Useful for proxies and for pointing tests at a local server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.,
    /// and keeps the client an explicit dependency rather than process-wide
    /// implicit state.
    ///
    /// # Example
    /// ```
    /// use scribe_client::OpenAiClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = OpenAiClient::with_client("sk-test", "https://api.openai.com/v1", http_client);
    /// ```
    pub fn with_client(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    /// POST request builder with bearer auth
    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    /// GET request builder with bearer auth
    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    /// DELETE request builder with bearer auth
    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    /// Adds the opt-in header the vendor requires on assistants-scope endpoints
    fn beta(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header(BETA_HEADER.0, BETA_HEADER.1)
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

    /// Handle an API response whose body the caller does not need
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAiClient::new("sk-test");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = OpenAiClient::with_base_url("sk-test", "http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = OpenAiClient::with_client("sk-test", "http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
