//! HTTP client for vocabulary.com
//!
//! Thin reqwest wrapper carrying the headers the site expects. There is no
//! retry loop and no client-side rate limiting: failures propagate
//! unchanged and callers own their own request pacing.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/56.0.2924.87 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// HTTP client wrapper used by all vocabulary.com calls
///
/// Non-success statuses are turned into errors up front, so parsers only
/// ever see bodies the server meant to send.
pub struct VocabClient {
    client: reqwest::Client,
}

impl VocabClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    "en-US,en;q=0.9".parse().unwrap(),
                );
                headers
            })
            .build()?;

        Ok(Self { client })
    }

    /// GET a page and return the body as a string
    ///
    /// # Arguments
    /// * `url` - Absolute endpoint URL
    /// * `query` - Query parameters to append, may be empty
    pub async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        debug!(url, "GET text");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// GET a JSON endpoint and deserialize the body
    pub async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(url, "GET json");
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// POST a form body to a JSON endpoint and deserialize the response
    pub async fn post_form<T>(&self, url: &str, form: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(url, "POST form");
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
