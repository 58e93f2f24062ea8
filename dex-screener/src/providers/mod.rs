//! Transport to the DexScreener API.
//!
mod http_provider;
pub use http_provider::HttpJsonSource;

use async_trait::async_trait;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use serde_json::Value;

/// Generic errors for providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ProviderError::Decode(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Decode(e.to_string())
    }
}

/// Performs a bare `GET` and returns the decoded JSON body.
/// Mainly done for mocking purposes, as `reqwest::Client` is not a trait.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, ProviderError>;
}
