//! End-to-end tests running the compiled s3notify binary
//!
//! Only offline scenarios are covered here; the cloud operations are tested
//! against the in-memory backend in the unit tests.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::uninlined_format_args,
    clippy::missing_panics_doc
)]

mod common;

use common::{create_test_file, run_s3notify};

#[test]
fn test_version() {
    let output = run_s3notify(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_single_dash() {
    let output = run_s3notify(&["-help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "filepath",
        "bucket",
        "key",
        "lambda",
        "list-buckets",
        "list-functions",
        "keys",
    ] {
        assert!(stdout.contains(flag), "help is missing {flag}: {stdout}");
    }
}

#[test]
fn test_nothing_to_do() {
    let output = run_s3notify(&[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_keys_without_bucket() {
    let output = run_s3notify(&["-keys"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_upload_missing_file() {
    let output = run_s3notify(&[
        "-filepath=/nonexistent/s3notify/a.txt",
        "-bucket=b",
        "-key=x",
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error uploading file"), "stdout: {stdout}");
    assert!(stdout.contains("/nonexistent/s3notify/a.txt"));
    assert!(!stdout.contains("File uploaded successfully"));
}

#[test]
fn test_upload_requires_bucket() {
    // without -bucket nothing is uploaded and nothing fails
    let file = create_test_file(b"hello");
    let filepath = format!("-filepath={}", file.path().display());
    let output = run_s3notify(&[&filepath, "-key=x"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_switch_value() {
    let output = run_s3notify(&["-list-buckets=maybe"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_flag() {
    let output = run_s3notify(&["-nope"]);
    assert_eq!(output.status.code(), Some(2));
}
