use bedrock_smoke_core::config::SmokeConfig;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Runs the fixed smoke scenarios against a Bedrock model endpoint")]
pub struct Args {
    /// AWS region hosting the runtime endpoint.
    #[arg(long)]
    pub region: Option<String>,

    /// Model id or inference-profile ARN. Treated as opaque.
    #[arg(long)]
    pub model_id: Option<String>,

    /// Full endpoint URL override (defaults to the regional runtime URL).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Bearer token for endpoints that accept API-key auth.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Total attempts per invocation, including the first.
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Maximum output tokens requested per invocation.
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

impl Args {
    /// Flags win over config file and env values.
    pub fn apply(&self, cfg: &mut SmokeConfig) {
        if let Some(v) = &self.region {
            cfg.region = v.clone();
        }
        if let Some(v) = &self.model_id {
            cfg.model_id = v.clone();
        }
        if let Some(v) = &self.endpoint {
            cfg.endpoint = Some(v.clone());
        }
        if let Some(v) = &self.api_key {
            cfg.api_key = v.clone();
        }
        if let Some(v) = self.max_attempts {
            cfg.retry.max_attempts = v;
        }
        if let Some(v) = self.max_tokens {
            cfg.max_tokens = v;
        }
    }
}
