use std::fmt;

/// Execution class of an example.
///
/// Displayed with the CLI flag spelling (`rust` / `web`), which is also the
/// prefix used in failure tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleClass {
    Native,
    Web,
}

impl fmt::Display for ExampleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleClass::Native => write!(f, "rust"),
            ExampleClass::Web => write!(f, "web"),
        }
    }
}

/// Outcome of one invocation of an external process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    Failed(i32),
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Success)
    }
}

/// Unit of final reporting: an example (or the whole web suite) that did not
/// succeed within its budget.
///
/// The web class is a single tag because the browser-test command only
/// reports an aggregate exit code; individual web examples are not visible
/// to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureRecord {
    Native { name: String },
    WebSuite,
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureRecord::Native { name } => write!(f, "rust:{name}"),
            FailureRecord::WebSuite => write!(f, "web:suite"),
        }
    }
}
