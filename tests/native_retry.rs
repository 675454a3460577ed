// tests/native_retry.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use exrun::exec::run_native_examples;
use exrun::rundir::{LOG_FILE_NAME, RunWorkspace};
use exrun::types::{AttemptOutcome, FailureRecord};

use exrun_test_utils::builders::ConfigBuilder;
use exrun_test_utils::fake_invoker::{FakeDelay, FakeInvoker};
use exrun_test_utils::init_tracing;

fn workspace(temp: &tempfile::TempDir) -> RunWorkspace {
    let masm = temp.path().join("masm");
    std::fs::create_dir_all(&masm).unwrap();
    RunWorkspace::prepare(temp.path().join("runs"), &masm).unwrap()
}

/// Attempt directories under the runs base, excluding the shared masm link.
fn attempt_dirs(base: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(base)
        .unwrap()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_name() != "masm")
        .map(|entry| entry.path())
        .collect();
    dirs.sort();
    dirs
}

#[tokio::test]
async fn success_on_first_attempt_creates_one_directory_and_no_delay() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let ws = workspace(&temp);
    let cfg = ConfigBuilder::new().retries(3).retry_delay_secs(10).build();

    let names = vec!["create_mint_consume_send".to_string()];
    let mut invoker = FakeInvoker::new();
    let mut delay = FakeDelay::new();

    let failures = run_native_examples(&names, &cfg, &ws, &mut invoker, &mut delay)
        .await
        .unwrap();

    assert!(failures.is_empty());
    assert!(delay.waits().is_empty());

    let dirs = attempt_dirs(ws.base());
    assert_eq!(dirs.len(), 1);

    let invocations = invoker.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].name, "create_mint_consume_send");
    assert_eq!(invocations[0].run_dir, dirs[0]);
    assert_eq!(invocations[0].log_path, dirs[0].join(LOG_FILE_NAME));
}

#[tokio::test]
async fn failing_example_exhausts_budget_with_delays_between_attempts() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let ws = workspace(&temp);
    let cfg = ConfigBuilder::new().retries(2).retry_delay_secs(10).build();

    let names = vec!["create_mint_consume_send".to_string()];
    let mut invoker = FakeInvoker::new().with_outcomes(
        "create_mint_consume_send",
        vec![AttemptOutcome::Failed(1), AttemptOutcome::Failed(1)],
    );
    let mut delay = FakeDelay::new();

    let failures = run_native_examples(&names, &cfg, &ws, &mut invoker, &mut delay)
        .await
        .unwrap();

    assert_eq!(
        failures,
        vec![FailureRecord::Native {
            name: "create_mint_consume_send".to_string()
        }]
    );
    assert_eq!(failures[0].to_string(), "rust:create_mint_consume_send");

    // One delay between the two attempts, none after the final failure.
    assert_eq!(delay.waits(), vec![Duration::from_secs(10)]);

    let dirs = attempt_dirs(ws.base());
    assert_eq!(dirs.len(), 2);
    assert_ne!(dirs[0], dirs[1]);

    let invocations = invoker.invocations();
    assert_eq!(invocations.len(), 2);
    assert_ne!(invocations[0].run_dir, invocations[1].run_dir);
}

#[tokio::test]
async fn transient_failure_recovers_on_retry() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let ws = workspace(&temp);
    let cfg = ConfigBuilder::new().retries(3).retry_delay_secs(10).build();

    let names = vec!["counter_contract_deploy".to_string()];
    let mut invoker = FakeInvoker::new().with_outcomes(
        "counter_contract_deploy",
        vec![AttemptOutcome::Failed(101), AttemptOutcome::Success],
    );
    let mut delay = FakeDelay::new();

    let failures = run_native_examples(&names, &cfg, &ws, &mut invoker, &mut delay)
        .await
        .unwrap();

    assert!(failures.is_empty());
    assert_eq!(invoker.invocations().len(), 2);
    assert_eq!(delay.waits().len(), 1);
    assert_eq!(attempt_dirs(ws.base()).len(), 2);
}

#[tokio::test]
async fn one_failing_example_does_not_stop_the_rest() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let ws = workspace(&temp);
    let cfg = ConfigBuilder::new().retries(2).retry_delay_secs(0).build();

    let names = vec![
        "counter_contract_deploy".to_string(),
        "hash_preimage_note".to_string(),
    ];
    let mut invoker = FakeInvoker::new().with_outcomes(
        "counter_contract_deploy",
        vec![AttemptOutcome::Failed(1), AttemptOutcome::Failed(1)],
    );
    let mut delay = FakeDelay::new();

    let failures = run_native_examples(&names, &cfg, &ws, &mut invoker, &mut delay)
        .await
        .unwrap();

    assert_eq!(
        failures,
        vec![FailureRecord::Native {
            name: "counter_contract_deploy".to_string()
        }]
    );

    // The second example still ran, after the first one's budget ran out.
    let executed: Vec<String> = invoker
        .invocations()
        .iter()
        .map(|i| i.name.clone())
        .collect();
    assert_eq!(
        executed,
        vec![
            "counter_contract_deploy".to_string(),
            "counter_contract_deploy".to_string(),
            "hash_preimage_note".to_string()
        ]
    );
}
