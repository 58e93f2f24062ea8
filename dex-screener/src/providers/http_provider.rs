use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::trace;

use super::{JsonSource, ProviderError};

/// `JsonSource` backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpJsonSource {
    client: Client,
}

impl HttpJsonSource {
    /// Builds a source with an optional transport timeout.
    /// Without timeout, a request waits as long as the connection stays open.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn get_json(&self, url: &str) -> Result<Value, ProviderError> {
        trace!(url, "GET");
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
