//! Sequences the fixed scenarios and aggregates pass/fail.

mod outcome;
mod report;
mod scenarios;

pub use outcome::TestOutcome;
pub use report::{exit_code, print_banner, print_summary};
pub use scenarios::{scenarios, summarization_prompt, Scenario, BASIC_PROMPT};

use crate::invoker::ModelInvoker;

/// Runs the three scenarios strictly in order. Each one is guarded
/// individually: an error escaping the invoker boundary is recorded as a
/// failed outcome and never aborts the remaining scenarios.
pub async fn run_all(invoker: &dyn ModelInvoker) -> Vec<TestOutcome> {
    let mut outcomes = Vec::new();
    for scenario in scenarios() {
        report::print_banner(&format!(
            "SCENARIO {}: {}",
            outcomes.len() + 1,
            scenario.name
        ));
        outcomes.push(run_scenario(invoker, &scenario).await);
    }
    outcomes
}

async fn run_scenario(invoker: &dyn ModelInvoker, scenario: &Scenario) -> TestOutcome {
    match invoker.invoke(&scenario.prompt).await {
        Ok(result) => {
            let rendered = result.render();
            println!("\nResult:\n{rendered}\n");
            TestOutcome {
                name: scenario.name.to_string(),
                passed: scenario.passes(&rendered),
                detail: None,
            }
        }
        Err(err) => {
            tracing::error!(
                scenario = scenario.name,
                error = %err,
                "scenario raised instead of returning a result"
            );
            TestOutcome {
                name: scenario.name.to_string(),
                passed: false,
                detail: Some(err.to_string()),
            }
        }
    }
}
