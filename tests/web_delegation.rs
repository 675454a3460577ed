// tests/web_delegation.rs

use exrun::exec::{run_web_examples, web_filter_pattern};
use exrun::types::{AttemptOutcome, FailureRecord};

use exrun_test_utils::fake_invoker::FakeInvoker;
use exrun_test_utils::init_tracing;

#[test]
fn filter_pattern_joins_escaped_names_with_alternation() {
    let names = vec!["create_mint_consume".to_string(), "counter_contract".to_string()];
    assert_eq!(web_filter_pattern(&names), "create_mint_consume|counter_contract");

    // Regex metacharacters in a name must not widen the filter.
    let names = vec!["a.b".to_string(), "c".to_string()];
    assert_eq!(web_filter_pattern(&names), "a\\.b|c");
}

#[tokio::test]
async fn empty_web_selection_invokes_nothing() {
    init_tracing();

    let mut invoker = FakeInvoker::new();
    let failures = run_web_examples(&[], &mut invoker).await.unwrap();

    assert!(failures.is_empty());
    assert!(invoker.web_patterns().is_empty());
}

#[tokio::test]
async fn web_selection_is_delegated_as_a_single_invocation() {
    init_tracing();

    let names = vec!["create_mint_consume".to_string(), "note_transfer".to_string()];
    let mut invoker = FakeInvoker::new();

    let failures = run_web_examples(&names, &mut invoker).await.unwrap();

    assert!(failures.is_empty());
    assert_eq!(
        invoker.web_patterns(),
        vec!["create_mint_consume|note_transfer".to_string()]
    );
}

#[tokio::test]
async fn web_suite_failure_yields_one_class_level_record() {
    init_tracing();

    let names = vec!["create_mint_consume".to_string(), "note_transfer".to_string()];
    let mut invoker = FakeInvoker::new().with_web_outcome(AttemptOutcome::Failed(1));

    let failures = run_web_examples(&names, &mut invoker).await.unwrap();

    // One record for the class, not one per example: the aggregate exit code
    // cannot say which web example failed.
    assert_eq!(failures, vec![FailureRecord::WebSuite]);
    assert_eq!(failures[0].to_string(), "web:suite");
    assert_eq!(invoker.web_patterns().len(), 1);
}
