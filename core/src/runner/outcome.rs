/// One scenario's verdict, collected in run order for the summary.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    pub name: String,
    pub passed: bool,
    pub detail: Option<String>,
}
