pub mod openai;

use crate::config::Config;
use crate::error::Error;
use async_trait::async_trait;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The single shell command extracted from the API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub command: String,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// One request, one proposed command. No retries; the first failure
    /// surfaces as-is.
    async fn complete(&self, system: &str, task: &str) -> Result<CompletionResult, Error>;
}

pub fn create_provider(config: &Config) -> Box<dyn CompletionProvider> {
    Box::new(openai::OpenAiProvider::new(config))
}

/// Create a reqwest client with the default timeout
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
