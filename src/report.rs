// src/report.rs

//! Final failure summary and the exit-code decision.

use crate::types::FailureRecord;

/// Exit code for a run with at least one unrecovered failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Render the end-of-run summary block, or `None` if nothing failed.
pub fn render_summary(failures: &[FailureRecord]) -> Option<String> {
    if failures.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(&format!("failed examples ({}):\n", failures.len()));
    for failure in failures {
        out.push_str(&format!("  - {failure}\n"));
    }
    Some(out)
}

/// Print the summary and return the process exit code.
///
/// This is the only place the final exit code is decided.
pub fn summarize(failures: &[FailureRecord]) -> i32 {
    match render_summary(failures) {
        Some(summary) => {
            println!();
            print!("{summary}");
            FAILURE_EXIT_CODE
        }
        None => {
            println!("all selected examples succeeded");
            0
        }
    }
}
