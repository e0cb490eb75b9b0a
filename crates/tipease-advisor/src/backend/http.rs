//! HTTP text-generation backend.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use tipease_core::advisory::AdvisoryRequest;

use super::SuggestionBackend;
use crate::error::{AdvisorError, AdvisorResult};
use crate::protocol::{FairSplitInput, FairSplitOutput};

/// Posts `{ tipAmount, peopleCount }` to a fair-split endpoint.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl HttpBackend {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        api_key: Option<String>,
    ) -> AdvisorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdvisorError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(HttpBackend {
            client,
            endpoint: endpoint.into(),
            api_key,
            timeout_secs: timeout.as_secs(),
        })
    }
}

#[async_trait]
impl SuggestionBackend for HttpBackend {
    async fn suggest(&self, request: &AdvisoryRequest) -> AdvisorResult<String> {
        let body = FairSplitInput::from(request);
        debug!(endpoint = %self.endpoint, ?body, "Posting fair-split request");

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AdvisorError::from_transport(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, status = status.as_u16(), "Could not read error body");
                    String::new()
                }
            };
            return Err(AdvisorError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| AdvisorError::from_transport(e, self.timeout_secs))?;
        let output: FairSplitOutput = serde_json::from_str(&text)?;

        let suggestion = output.suggestion.trim();
        if suggestion.is_empty() {
            return Err(AdvisorError::EmptySuggestion);
        }
        Ok(suggestion.to_string())
    }
}
