//! Runs the `maximin` binary end to end.

use std::process::Command;

const EXPECTED_STDOUT: &str = "optimal\n[ 4.18e-01]\n[ 1.63e-01]\n[ 4.18e-01]\n";

fn run_maximin(log_level: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_maximin"))
        .env("RUST_LOG", log_level)
        .output()
        .expect("failed to run maximin")
}

#[test]
fn test_prints_status_and_strategy() {
    let output = run_maximin("off");

    assert!(output.status.success(), "exit status {:?}", output.status);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_STDOUT);
}

#[test]
fn test_logging_stays_on_stderr() {
    let output = run_maximin("debug");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_STDOUT);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("maximin value"), "missing solve log in {:?}", stderr);
}
