use serde::Serialize;
use serde_json::Value;

/// Protocol-version marker the endpoint expects in every request body.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Placeholder returned when a content block exists but carries no text.
pub const NO_TEXT_PLACEHOLDER: &str = "No text in response";

/// Wire shape of one invoke call. Built fresh per call; no identity beyond
/// its fields.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationRequest {
    pub anthropic_version: &'static str,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl InvocationRequest {
    /// Single-turn user message carrying the prompt verbatim.
    pub fn user_text(prompt: &str, max_tokens: u32) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: vec![ContentBlock {
                    kind: "text",
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Pulls the generated text out of a decoded response body.
///
/// A body without a `content` key is returned serialized as-is. That is a
/// deliberate fallback, not an error: the scenario gate only looks for the
/// failure marker, and a well-formed response with an unexpected shape
/// should still be shown to the operator.
pub fn extract_text(body: &Value) -> String {
    match body.get("content") {
        Some(content) => content
            .get(0)
            .and_then(|block| block.get("text"))
            .and_then(Value::as_str)
            .unwrap_or(NO_TEXT_PLACEHOLDER)
            .to_string(),
        None => body.to_string(),
    }
}
