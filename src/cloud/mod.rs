//! Object store and function service seams.
//!
//! <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations.html>
//! <https://docs.aws.amazon.com/lambda/latest/api/API_Operations.html>

pub mod actions;
pub mod error;
pub mod lambda;
pub mod payload;
pub mod provider;
pub mod s3;

#[cfg(test)]
pub mod fake;

pub use self::{
    error::{Error, Result},
    lambda::LambdaService,
    payload::Payload,
    provider::AwsProvider,
    s3::S3Store,
};

use async_trait::async_trait;
use tokio::fs::File;

/// One page of a `ListObjectsV2` response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectsPage {
    pub keys: Vec<String>,
    pub is_truncated: bool,
    pub next_continuation_token: Option<String>,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Puts the file contents at `bucket/key`. The file is consumed and closed
    /// when the call returns, whatever the outcome.
    async fn put_object(&self, bucket: &str, key: &str, file: File) -> Result<()>;

    async fn list_buckets(&self) -> Result<Vec<String>>;

    /// Requests a single page of keys, resuming at `continuation_token` if any.
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ObjectsPage>;
}

#[async_trait]
pub trait FunctionService: Send + Sync {
    /// Names of every function visible to the caller, in service order.
    async fn list_functions(&self) -> Result<Vec<String>>;

    /// Synchronous invocation; the function's return value is discarded.
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<()>;
}

/// Builds clients for the object store and the function service.
#[async_trait]
pub trait Provider: Send + Sync + 'static {
    type Store: ObjectStore + 'static;
    type Functions: FunctionService + 'static;

    async fn object_store(&self) -> Result<Self::Store>;

    async fn function_service(&self) -> Result<Self::Functions>;
}
