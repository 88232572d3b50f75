//! HTTP client for the remote lead collector
//!
//! The collector is a plain POST endpoint that accepts the application as
//! a flat JSON object. It is not guaranteed to return a readable response,
//! so this client never looks at status or body.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::traits::LeadCollector;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("collector request could not be sent: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the configured collector endpoint
pub struct CollectorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CollectorClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LeadCollector for CollectorClient {
    async fn dispatch(&self, payload: Value) -> Result<(), CollectorError> {
        // Whatever comes back is discarded; only a failure to send counts.
        let _response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;
        Ok(())
    }
}
