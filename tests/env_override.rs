// tests/env_override.rs

//! `EXRUN_RETRIES` handling lives in its own integration-test binary so the
//! environment mutation cannot race other tests.

use exrun::config::{RETRIES_ENV, load_and_validate};
use exrun::errors::RunnerError;

#[test]
fn retries_env_var_overrides_the_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("Exrun.toml");
    std::fs::write(&path, "[runner]\nretries = 2\n").unwrap();

    unsafe { std::env::set_var(RETRIES_ENV, "5") };
    let cfg = load_and_validate(&path).unwrap();
    assert_eq!(cfg.runner.retries, 5);

    unsafe { std::env::set_var(RETRIES_ENV, "not-a-number") };
    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, RunnerError::ConfigError(_)));

    // Zero from the environment still fails validation.
    unsafe { std::env::set_var(RETRIES_ENV, "0") };
    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, RunnerError::ConfigError(_)));

    unsafe { std::env::remove_var(RETRIES_ENV) };
    let cfg = load_and_validate(&path).unwrap();
    assert_eq!(cfg.runner.retries, 2);
}
