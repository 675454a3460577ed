// tests/rundir_layout.rs

use exrun::errors::RunnerError;
use exrun::rundir::{MASM_LINK_NAME, RunWorkspace};

use exrun_test_utils::init_tracing;

#[test]
fn prepare_creates_base_directory_and_masm_link() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let masm = temp.path().join("masm");
    std::fs::create_dir_all(&masm).unwrap();

    let base = temp.path().join("runs");
    let ws = RunWorkspace::prepare(&base, &masm).unwrap();

    assert!(ws.base().is_dir());

    let link = ws.base().join(MASM_LINK_NAME);
    let meta = std::fs::symlink_metadata(&link).unwrap();
    assert!(meta.file_type().is_symlink());

    let target = std::fs::read_link(&link).unwrap();
    assert_eq!(target, std::path::absolute(&masm).unwrap());
}

#[test]
fn prepare_is_idempotent() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let masm = temp.path().join("masm");
    std::fs::create_dir_all(&masm).unwrap();

    let base = temp.path().join("runs");
    RunWorkspace::prepare(&base, &masm).unwrap();
    RunWorkspace::prepare(&base, &masm).unwrap();
}

#[test]
fn non_symlink_at_masm_path_is_a_fatal_configuration_error() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let masm = temp.path().join("masm");
    std::fs::create_dir_all(&masm).unwrap();

    let base = temp.path().join("runs");
    std::fs::create_dir_all(base.join(MASM_LINK_NAME)).unwrap();

    let err = RunWorkspace::prepare(&base, &masm).unwrap_err();
    match err {
        RunnerError::ConfigError(msg) => assert!(msg.contains("not a symlink")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn attempt_directories_are_distinct_and_created() {
    init_tracing();

    let temp = tempfile::tempdir().unwrap();
    let masm = temp.path().join("masm");
    std::fs::create_dir_all(&masm).unwrap();

    let ws = RunWorkspace::prepare(temp.path().join("runs"), &masm).unwrap();

    let first = ws.attempt_dir("counter_contract_deploy", 1).unwrap();
    let second = ws.attempt_dir("counter_contract_deploy", 2).unwrap();

    assert_ne!(first, second);
    assert!(first.is_dir());
    assert!(second.is_dir());

    let pid = std::process::id().to_string();
    for (dir, attempt) in [(&first, "a1"), (&second, "a2")] {
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("counter_contract_deploy-"));
        assert!(name.contains(&pid));
        assert!(name.ends_with(attempt));
    }
}
