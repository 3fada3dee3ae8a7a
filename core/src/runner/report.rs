use super::outcome::TestOutcome;

/// 0 iff every scenario passed, 1 otherwise. Consumed by the deployment
/// gate wrapping this binary.
pub fn exit_code(outcomes: &[TestOutcome]) -> i32 {
    if outcomes.iter().all(|o| o.passed) {
        0
    } else {
        1
    }
}

pub fn print_banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

pub fn print_summary(outcomes: &[TestOutcome]) {
    print_banner("TEST SUMMARY");
    for o in outcomes {
        let status = if o.passed { "PASSED" } else { "FAILED" };
        match &o.detail {
            Some(detail) => println!("{}: {status} ({detail})", o.name),
            None => println!("{}: {status}", o.name),
        }
    }

    let passed = outcomes.iter().filter(|o| o.passed).count();
    println!("\nTotal: {passed}/{} scenarios passed", outcomes.len());

    if passed == outcomes.len() {
        println!("\n[SUCCESS] All scenarios passed.");
    } else {
        println!("\n[FAILED] Some scenarios failed.");
    }
}
