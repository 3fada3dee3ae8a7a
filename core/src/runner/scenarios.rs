use crate::invoker::FAILURE_MARKER;

pub const BASIC_PROMPT: &str = "Hello! What is 2+2?";

/// Reference paragraph embedded in the summarization scenario, mirroring
/// the prompt shape the deployed application sends.
pub const SUMMARY_CONTEXT: &str = "
    Canada is a North American country with 10 provinces and 3 territories.
    It is the second-largest country by land area. The capital is Ottawa.
    Canada is known for Niagara Falls, Rocky Mountains, and the Great Lakes.
    The population is approximately 40 million people.
    Official languages are English and French.
    ";

pub fn summarization_prompt() -> String {
    format!(
        "Topic: Canada\n\nContext:\n{SUMMARY_CONTEXT}\n\nProvide a concise summary (2-3 sentences)."
    )
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub prompt: String,
    /// Scenario 3 inverts the pass criterion on purpose: it probes that the
    /// error path is reachable, not that empty prompts succeed.
    pub expect_failure: bool,
}

impl Scenario {
    pub fn passes(&self, rendered: &str) -> bool {
        let failed = rendered.contains(FAILURE_MARKER);
        if self.expect_failure {
            failed
        } else {
            !failed
        }
    }
}

/// The three fixed scenarios, in run order.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "basic prompt",
            prompt: BASIC_PROMPT.to_string(),
            expect_failure: false,
        },
        Scenario {
            name: "summarization prompt",
            prompt: summarization_prompt(),
            expect_failure: false,
        },
        Scenario {
            name: "empty prompt (expected failure)",
            prompt: String::new(),
            expect_failure: true,
        },
    ]
}
