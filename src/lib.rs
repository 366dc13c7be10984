//! Upload files to S3, list buckets, keys and Lambda functions, and notify a
//! function about an uploaded object.
//!
//! Credentials and region come from the ambient AWS environment.

pub mod cli;
pub mod cloud;
