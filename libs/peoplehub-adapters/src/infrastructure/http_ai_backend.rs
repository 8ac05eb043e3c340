//! AI backend adapters
//!
//! [`HttpAiBackend`] posts `{"prompt": ...}` to a completion endpoint and
//! reads `{"text": ...}` back. [`DisabledAiBackend`] is bound when no endpoint
//! is configured so that dependent modules still assemble.

use std::time::Duration;

use async_trait::async_trait;
use peoplehub_domain::ports::AiBackend;
use peoplehub_domain::{DomainError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

#[derive(Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    text: String,
}

/// HTTP implementation of the `AiBackend` port
#[derive(Clone)]
pub struct HttpAiBackend {
    endpoint: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpAiBackend {
    /// Create a new HTTP AI backend
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Completion endpoint URL
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest client used for all requests
    pub fn new(endpoint: String, timeout: Duration, http_client: Client) -> Self {
        info!(endpoint = %endpoint, timeout_secs = timeout.as_secs(), "Initializing HttpAiBackend");
        Self {
            endpoint,
            timeout,
            http_client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AiBackend for HttpAiBackend {
    #[instrument(skip(self, prompt), fields(endpoint = %self.endpoint, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&CompletionRequest { prompt })
            .send()
            .await
            .map_err(|err| {
                error!(error = ?err, "AI backend request failed");
                if err.is_timeout() {
                    DomainError::upstream(format!("AI backend timed out after {:?}", self.timeout))
                } else {
                    DomainError::upstream(format!("AI backend request failed: {err}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "AI backend returned an error status");
            return Err(DomainError::upstream(format!(
                "AI backend responded with {status}"
            )));
        }

        let body: CompletionResponse = response.json().await.map_err(|err| {
            error!(error = ?err, "AI backend response could not be decoded");
            DomainError::upstream(format!("invalid AI backend response: {err}"))
        })?;
        debug!(text_len = body.text.len(), "AI completion received");
        Ok(body.text)
    }
}

/// `AiBackend` bound when `AI_BACKEND_URL` is not set
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAiBackend;

#[async_trait]
impl AiBackend for DisabledAiBackend {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(DomainError::unavailable("no AI backend is configured"))
    }
}
