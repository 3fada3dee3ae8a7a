use serde::{Deserialize, Serialize};

/// Top-level configuration for one smoke run.
///
/// The model identifier is an opaque endpoint address (a model id or an
/// inference-profile ARN); it is never parsed, only spliced into the
/// invoke URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Full endpoint URL override. When unset the regional Bedrock runtime
    /// URL is derived from `region`.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bearer token for endpoints that accept API-key auth. Empty disables
    /// the header.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_model_id() -> String {
    "anthropic.claude-3-5-haiku-20241022-v1:0".to_string()
}

fn default_max_tokens() -> u32 {
    512
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            model_id: default_model_id(),
            endpoint: None,
            api_key: "".to_string(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
            retry: RetryConfig::default(),
        }
    }
}

impl SmokeConfig {
    /// Base URL of the runtime endpoint, without a trailing slash.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }

    pub fn invoke_url(&self) -> String {
        format!("{}/model/{}/invoke", self.endpoint_url(), self.model_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// One backoff time-unit. The wait doubles each retry starting from
    /// this value.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_attempts() -> usize {
    3
}

fn default_base_delay_ms() -> u64 {
    1_000
}

fn default_max_delay_ms() -> u64 {
    10_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}
