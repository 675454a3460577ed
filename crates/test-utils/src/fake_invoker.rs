use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use exrun::errors::Result;
use exrun::exec::backend::{ExampleInvoker, RetryDelay};
use exrun::types::AttemptOutcome;

/// One recorded native invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInvocation {
    pub name: String,
    pub run_dir: PathBuf,
    pub log_path: PathBuf,
}

/// A fake invoker that:
/// - records every native invocation, clean, and web pattern
/// - answers each native attempt from a scripted per-name queue of outcomes,
///   repeating the last outcome once the queue runs dry (unscripted names
///   succeed immediately).
pub struct FakeInvoker {
    outcomes: HashMap<String, Vec<AttemptOutcome>>,
    web_outcome: AttemptOutcome,
    invocations: Arc<Mutex<Vec<RecordedInvocation>>>,
    cleans: Arc<Mutex<u32>>,
    web_patterns: Arc<Mutex<Vec<String>>>,
}

impl FakeInvoker {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            web_outcome: AttemptOutcome::Success,
            invocations: Arc::new(Mutex::new(Vec::new())),
            cleans: Arc::new(Mutex::new(0)),
            web_patterns: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script the outcomes of successive attempts of `name`.
    pub fn with_outcomes(mut self, name: &str, outcomes: Vec<AttemptOutcome>) -> Self {
        self.outcomes.insert(name.to_string(), outcomes);
        self
    }

    pub fn with_web_outcome(mut self, outcome: AttemptOutcome) -> Self {
        self.web_outcome = outcome;
        self
    }

    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn clean_count(&self) -> u32 {
        *self.cleans.lock().unwrap()
    }

    pub fn web_patterns(&self) -> Vec<String> {
        self.web_patterns.lock().unwrap().clone()
    }
}

impl Default for FakeInvoker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleInvoker for FakeInvoker {
    fn clean_native(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        *self.cleans.lock().unwrap() += 1;
        Box::pin(async { Ok(()) })
    }

    fn run_native<'a>(
        &'a mut self,
        name: &'a str,
        run_dir: &'a Path,
        log_path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<AttemptOutcome>> + Send + 'a>> {
        self.invocations.lock().unwrap().push(RecordedInvocation {
            name: name.to_string(),
            run_dir: run_dir.to_path_buf(),
            log_path: log_path.to_path_buf(),
        });

        let outcome = match self.outcomes.get_mut(name) {
            Some(queue) if queue.len() > 1 => queue.remove(0),
            Some(queue) => queue.first().copied().unwrap_or(AttemptOutcome::Success),
            None => AttemptOutcome::Success,
        };

        Box::pin(async move { Ok(outcome) })
    }

    fn run_web_suite<'a>(
        &'a mut self,
        pattern: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AttemptOutcome>> + Send + 'a>> {
        self.web_patterns.lock().unwrap().push(pattern.to_string());
        let outcome = self.web_outcome;
        Box::pin(async move { Ok(outcome) })
    }
}

/// A fake delay that records requested waits without sleeping.
#[derive(Default)]
pub struct FakeDelay {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl FakeDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl RetryDelay for FakeDelay {
    fn wait(&mut self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.waits.lock().unwrap().push(duration);
        Box::pin(async {})
    }
}
