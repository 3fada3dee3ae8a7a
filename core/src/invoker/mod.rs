//! One remote generate-text call, wrapped in a bounded-retry policy.

mod request;
mod retry;

pub use request::{extract_text, ContentBlock, InvocationRequest, Message, ANTHROPIC_VERSION};
pub use retry::RetryPolicy;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::SmokeConfig;
use crate::error::InvokeError;

/// Prefix marking a captured-but-reported error in rendered result text.
pub const FAILURE_MARKER: &str = "BEDROCK_ERROR";

/// Discriminated outcome of one invocation after retries. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    Success { text: String },
    Failure { error_kind: String, message: String },
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationResult::Success { .. })
    }

    /// Text shown to the operator. Failures carry the marker prefix so the
    /// scenario gate can tell reported errors apart from generated text.
    pub fn render(&self) -> String {
        match self {
            InvocationResult::Success { text } => text.clone(),
            InvocationResult::Failure {
                error_kind,
                message,
            } => format!("{FAILURE_MARKER}: {error_kind}: {message}"),
        }
    }
}

/// Seam between the scenario runner and the transport, so scenarios can be
/// exercised against a scripted invoker.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// The `Err` arm is the escape hatch the runner guards against; the
    /// real invoker reports everything through `InvocationResult`.
    async fn invoke(&self, prompt: &str) -> anyhow::Result<InvocationResult>;
}

/// Issues invoke calls against the configured runtime endpoint. Holds the
/// one long-lived HTTP client; connection reuse is the only cross-call
/// state.
pub struct Invoker {
    client: reqwest::Client,
    config: SmokeConfig,
    retry: RetryPolicy,
}

impl Invoker {
    pub fn new(config: SmokeConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        let retry = RetryPolicy::from(&config.retry);
        Ok(Self {
            client,
            config,
            retry,
        })
    }

    async fn attempt(&self, request: &InvocationRequest) -> Result<String, InvokeError> {
        let body = serde_json::to_string(request)?;
        let preview: String = body.chars().take(200).collect();
        tracing::debug!(request_preview = %preview, "sending invoke request");

        let mut req = self
            .client
            .post(self.config.invoke_url())
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .body(body);
        if !self.config.api_key.is_empty() {
            req = req.bearer_auth(&self.config.api_key);
        }

        let resp = req.send().await?;
        let status = resp.status();
        tracing::info!(status = status.as_u16(), "response received");

        let text = resp.text().await?;
        if !status.is_success() {
            return Err(InvokeError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let value: Value = serde_json::from_str(&text)?;
        let keys = match value.as_object() {
            Some(map) => map.keys().cloned().collect::<Vec<_>>().join(","),
            None => "unknown".to_string(),
        };
        tracing::debug!(body_keys = %keys, "decoded response body");

        Ok(extract_text(&value))
    }
}

#[async_trait]
impl ModelInvoker for Invoker {
    async fn invoke(&self, prompt: &str) -> anyhow::Result<InvocationResult> {
        tracing::info!(
            model_id = %self.config.model_id,
            region = %self.config.region,
            prompt_len = prompt.len(),
            "invoking model"
        );

        let request = InvocationRequest::user_text(prompt, self.config.max_tokens);
        let outcome = self.retry.run(|| self.attempt(&request)).await;

        Ok(match outcome {
            Ok(text) => {
                tracing::info!(chars = text.len(), "invoke succeeded");
                InvocationResult::Success { text }
            }
            Err(err) => {
                // Report the last underlying attempt's identity, not the
                // exhaustion wrapper's.
                let terminal = err.terminal_cause();
                tracing::warn!(
                    error_kind = terminal.kind(),
                    error = %terminal,
                    "invoke failed after retries"
                );
                InvocationResult::Failure {
                    error_kind: terminal.kind().to_string(),
                    message: terminal.to_string(),
                }
            }
        })
    }
}
