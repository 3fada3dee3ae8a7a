use std::path::Path;

use super::types::SmokeConfig;

/// Loads `config.toml` from the working directory when present, otherwise
/// starts from defaults, then applies `BEDROCK_SMOKE_*` env overrides.
pub fn load_default() -> anyhow::Result<SmokeConfig> {
    let mut cfg: SmokeConfig = if Path::new("config.toml").exists() {
        let s = std::fs::read_to_string("config.toml")?;
        toml::from_str::<SmokeConfig>(&s)?
    } else {
        SmokeConfig::default()
    };

    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut SmokeConfig) {
    if let Ok(v) = std::env::var("BEDROCK_SMOKE_REGION") {
        if !v.trim().is_empty() {
            cfg.region = v;
        }
    }
    if let Ok(v) = std::env::var("BEDROCK_SMOKE_MODEL_ID") {
        if !v.trim().is_empty() {
            cfg.model_id = v;
        }
    }
    if let Ok(v) = std::env::var("BEDROCK_SMOKE_ENDPOINT") {
        if !v.trim().is_empty() {
            cfg.endpoint = Some(v);
        }
    }
    if let Ok(v) = std::env::var("BEDROCK_SMOKE_API_KEY") {
        if !v.trim().is_empty() {
            cfg.api_key = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_replace_config_values() {
        std::env::set_var("BEDROCK_SMOKE_REGION", "ap-southeast-2");
        std::env::set_var("BEDROCK_SMOKE_MODEL_ID", "profile-arn-from-env");
        std::env::set_var("BEDROCK_SMOKE_ENDPOINT", "http://localhost:4000");

        let mut cfg = SmokeConfig::default();
        apply_env_overrides(&mut cfg);

        assert_eq!(cfg.region, "ap-southeast-2");
        assert_eq!(cfg.model_id, "profile-arn-from-env");
        assert_eq!(cfg.endpoint.as_deref(), Some("http://localhost:4000"));

        std::env::remove_var("BEDROCK_SMOKE_REGION");
        std::env::remove_var("BEDROCK_SMOKE_MODEL_ID");
        std::env::remove_var("BEDROCK_SMOKE_ENDPOINT");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        std::env::set_var("BEDROCK_SMOKE_API_KEY", "   ");
        let mut cfg = SmokeConfig::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.api_key, "");
        std::env::remove_var("BEDROCK_SMOKE_API_KEY");
    }
}
