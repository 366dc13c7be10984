use crate::cloud::{Error, ObjectStore, ObjectsPage, Result, error::sdk_message};
use async_trait::async_trait;
use aws_sdk_s3::{Client, primitives::ByteStream};
use tokio::fs::File;

/// `ObjectStore` backed by `aws_sdk_s3`.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    // <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html>
    async fn put_object(&self, bucket: &str, key: &str, file: File) -> Result<()> {
        let upload_error = |message: String| Error::Upload {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        };

        let body = ByteStream::read_from()
            .file(file)
            .build()
            .await
            .map_err(|e| upload_error(sdk_message(&e)))?;

        let rs = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| upload_error(sdk_message(&e)))?;

        log::info!("ETag: {}", rs.e_tag().unwrap_or_default());

        Ok(())
    }

    // <https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html>
    async fn list_buckets(&self) -> Result<Vec<String>> {
        let rs = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| Error::List(sdk_message(&e)))?;

        Ok(rs
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name().map(ToString::to_string))
            .collect())
    }

    // <https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html>
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ObjectsPage> {
        let rs = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .set_prefix(prefix.map(ToString::to_string))
            .set_continuation_token(continuation_token.map(ToString::to_string))
            .send()
            .await
            .map_err(|e| Error::List(sdk_message(&e)))?;

        Ok(ObjectsPage {
            keys: rs
                .contents()
                .iter()
                .filter_map(|object| object.key().map(ToString::to_string))
                .collect(),
            is_truncated: rs.is_truncated().unwrap_or(false),
            next_continuation_token: rs.next_continuation_token().map(ToString::to_string),
        })
    }
}
