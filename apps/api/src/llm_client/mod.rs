/// Generative service client — the single point of entry for all Claude API
/// calls in Kyle.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All generative interactions MUST go through this module.
///
/// Each call is a single attempt with a per-task timeout. Failures are
/// reported once and never retried here; whether to try again is the
/// caller's decision.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all generative calls in Kyle.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";

#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("service credential is not configured")]
    Configuration,

    #[error("service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("service returned empty content")]
    EmptyContent,
}

/// Message role on the wire. Order of messages is significant and replayed
/// exactly as composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single role-tagged message in a composed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A fully composed request payload: system instruction, ordered messages,
/// and the per-task output/time budgets.
///
/// Built exclusively by `assistant::composer`. Composition is a pure
/// function of its inputs, so identical inputs yield identical payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
pub struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl ApiResponse {
    /// Concatenates the textual content of every text block.
    fn text(&self) -> String {
        self.content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The wire behind the client. Production uses `HttpTransport`; tests
/// substitute a scripted mock to assert on call counts.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        api_key: &str,
        request: &ApiRequest<'_>,
        timeout: Duration,
    ) -> Result<String, LlmError>;
}

/// Production transport: POSTs to the Anthropic Messages API via reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    fn new() -> Self {
        // No global timeout on the builder; each request carries the
        // timeout of the task that composed it.
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        api_key: &str,
        request: &ApiRequest<'_>,
        timeout: Duration,
    ) -> Result<String, LlmError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .timeout(timeout)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own error message when the body is parseable
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Transport(format!("invalid response body: {e}")))?;

        debug!(
            "service call succeeded: input_tokens={}, output_tokens={}",
            api_response.usage.input_tokens, api_response.usage.output_tokens
        );

        Ok(api_response.text())
    }
}

/// The single generative client used by every task in Kyle.
#[derive(Clone)]
pub struct LlmClient {
    api_key: Option<String>,
    transport: Arc<dyn Transport>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_transport(api_key, Arc::new(HttpTransport::new()))
    }

    /// Constructs a client over an explicit transport. Tests use this to
    /// substitute a scripted mock.
    pub fn with_transport(api_key: Option<String>, transport: Arc<dyn Transport>) -> Self {
        Self { api_key, transport }
    }

    /// Sends a composed payload and returns the textual completion.
    ///
    /// A missing credential fails here, before any network I/O is attempted.
    pub async fn complete(&self, prompt: &ComposedPrompt) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(LlmError::Configuration)?;

        let request = ApiRequest {
            model: MODEL,
            max_tokens: prompt.max_tokens,
            system: &prompt.system,
            messages: &prompt.messages,
        };

        let text = self
            .transport
            .execute(api_key, &request, prompt.timeout)
            .await?;

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(text)
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted transport mock shared by unit tests across the crate.

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::{ApiRequest, LlmError, Transport};

    /// Transport that pops pre-scripted outcomes and counts every invocation.
    pub struct MockTransport {
        calls: AtomicUsize,
        responses: Mutex<VecDeque<Result<String, LlmError>>>,
    }

    impl MockTransport {
        pub fn scripted(responses: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                responses: Mutex::new(responses.into()),
            })
        }

        /// Number of times the transport was invoked.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn execute(
            &self,
            _api_key: &str,
            _request: &ApiRequest<'_>,
            _timeout: Duration,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .expect("mock transport lock poisoned")
                .pop_front()
                .unwrap_or_else(|| Err(LlmError::Transport("no scripted response".to_string())))
        }
    }
}
