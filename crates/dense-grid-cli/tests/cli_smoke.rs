//! End-to-end tests for the `dense-grid` binary.
//!
//! Covers the `check` self-check (defaults, flag and config overrides, rejected and
//! degenerate shapes) and the `show` printer, asserting on exit status and output.

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

fn dense_grid() -> Command {
    let mut cmd = Command::cargo_bin("dense-grid").unwrap();
    cmd.timeout(Duration::from_secs(30));
    cmd
}

// ---------------------------------------------------------------------------
// Usage
// ---------------------------------------------------------------------------

#[test]
fn bare_invocation_prints_usage_and_fails() {
    dense_grid()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("check"));
}

#[test]
fn help_lists_both_subcommands() {
    dense_grid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run the grid construction"))
        .stdout(predicate::str::contains("Print a grid of the given shape"));
}

#[test]
fn version_reports_package_version() {
    dense_grid()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_with_defaults_passes() {
    dense_grid()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Self-check passed: 1 round(s)"))
        .stdout(predicate::str::contains("6 cells"))
        .stderr(predicate::str::contains("No config provided"));
}

#[test]
fn check_overrides_shape_and_repeat() {
    dense_grid()
        .args(["check", "--rows", "4", "--cols", "5", "--repeat", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 round(s)"))
        .stdout(predicate::str::contains("20 cells"));
}

#[test]
fn check_accepts_negative_values() {
    dense_grid()
        .args(["check", "--initial", "-2.5", "--fill", "-1"])
        .assert()
        .success();
}

#[test]
fn check_zero_repeat_fails() {
    dense_grid()
        .args(["check", "--repeat", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repeat must be at least 1"));
}

#[test]
fn check_zero_width_grid_with_max_rows_finishes() {
    dense_grid()
        .args(["check", "--rows", "18446744073709551615", "--cols", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 cells"));
}

#[test]
fn check_oversized_grid_fails_cleanly() {
    dense_grid()
        .args(["check", "--rows", "4611686018427387904", "--cols", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Self-check failed"))
        .stderr(predicate::str::contains("overflows"));
}

#[test]
fn check_nonexistent_config_errors() {
    dense_grid()
        .args(["check", "/nonexistent/config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn check_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("check.json");
    std::fs::write(&path, r#"{"rows": 7, "cols": 1, "repeat": 2}"#).unwrap();

    dense_grid()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 round(s)"))
        .stdout(predicate::str::contains("7 cells"))
        .stderr(predicate::str::contains("No config provided").not());
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_prints_rows() {
    dense_grid()
        .args(["show", "--rows", "2", "--cols", "3", "--value", "1.5"])
        .assert()
        .success()
        .stdout("[1.5, 1.5, 1.5]\n[1.5, 1.5, 1.5]\n");
}

#[test]
fn show_requires_shape() {
    dense_grid()
        .args(["show", "--rows", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cols"));
}
