//! Common test helpers for the binary tests
//!
//! Nothing here talks to AWS: the scenarios either stop before a client is
//! built or never request one.

#![allow(dead_code, clippy::expect_used)]

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Run s3notify with the given arguments and an environment that points the
/// AWS SDK nowhere useful.
pub fn run_s3notify(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_s3notify"))
        .args(args)
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_REGION", "us-east-1")
        .env_remove("AWS_PROFILE")
        .output()
        .expect("Failed to execute s3notify")
}

/// Helper to create a test file with the given content
pub fn create_test_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write");
    file.flush().expect("Failed to flush");
    file
}
