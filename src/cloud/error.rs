use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the cloud operations.
///
/// SDK errors are flattened into a readable message when they are converted.
/// Local I/O and JSON errors are kept as the error source.
#[derive(Debug, Error)]
pub enum Error {
    /// Credentials or region could not be resolved from the environment.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not open file {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not upload {bucket}/{key}: {message}")]
    Upload {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("list request failed: {0}")]
    List(String),

    #[error("could not invoke function {function}: {message}")]
    Invoke { function: String, message: String },

    #[error("could not serialize payload")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid payload: {0}")]
    Payload(String),

    /// A listing page claimed to be truncated but carried no continuation token.
    #[error("truncated listing of bucket {0} returned no continuation token")]
    Protocol(String),

    #[error("background task ended without a result: {0}")]
    Task(String),
}

/// Renders an SDK error with its full source chain.
#[must_use]
pub fn sdk_message<E: std::error::Error>(err: &E) -> String {
    aws_sdk_s3::error::DisplayErrorContext(err).to_string()
}
