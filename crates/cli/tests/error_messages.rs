//! Integration tests for the failure path.
//!
//! Every failure funnels through one reporting path: the error is logged
//! and the remote-debugging hint is printed before a non-zero exit.

use std::path::PathBuf;
use std::process::Command;

/// Helper to get the crumb binary path
fn crumb_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("crumb");
    path
}

fn run_crumb(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(crumb_binary())
        .args(args)
        .output()
        .expect("Failed to execute crumb");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (output.status.success(), stdout, stderr)
}

#[test]
fn unreachable_endpoint_fails_with_remote_debugging_hint() {
    // Nothing listens on port 1; attach must fail before navigation.
    let (success, _stdout, stderr) = run_crumb(&["-e", "127.0.0.1:1", "fetch"]);

    assert!(!success, "Expected failure against a dead endpoint");
    assert!(
        stderr.contains("--remote-debugging-port=1"),
        "Expected the remediation hint, got: {stderr}"
    );
}

#[test]
fn invalid_endpoint_fails_before_any_connection() {
    let (success, _stdout, stderr) = run_crumb(&["-e", "not-an-endpoint", "pages"]);

    assert!(!success, "Expected failure for a malformed endpoint");
    assert!(
        stderr.contains("invalid debugging endpoint"),
        "Expected a parse error, got: {stderr}"
    );
}

#[test]
fn pages_against_dead_endpoint_prints_no_report() {
    let (success, stdout, _stderr) = run_crumb(&["-e", "127.0.0.1:1", "pages"]);

    assert!(!success);
    assert!(
        stdout.is_empty(),
        "No report expected on failure, got: {stdout}"
    );
}
