use crate::cloud::{Error, ObjectStore, Result};

/// Lists every key of a bucket, following continuation tokens until the
/// service reports a page that is not truncated.
#[derive(Debug, Default)]
pub struct ListObjectsV2 {
    pub bucket: String,
    pub prefix: Option<String>,
}

impl ListObjectsV2 {
    #[must_use]
    pub fn new(bucket: &str, prefix: Option<String>) -> Self {
        Self {
            bucket: bucket.to_string(),
            prefix,
        }
    }

    /// Keys are returned in the order the service sent them, page after page.
    /// Nothing accumulated so far is returned if any page fails.
    ///
    /// # Errors
    ///
    /// Will return `Error::List` if a request fails, or `Error::Protocol` if a
    /// truncated page carries no continuation token
    pub async fn request<S: ObjectStore + ?Sized>(&self, store: &S) -> Result<Vec<String>> {
        let mut keys: Vec<String> = Vec::new();
        let mut continuation_token: Option<String> = None;
        let mut page_number: usize = 1;

        loop {
            let page = store
                .list_objects(
                    &self.bucket,
                    self.prefix.as_deref(),
                    continuation_token.as_deref(),
                )
                .await?;

            log::debug!(
                "page {page_number}: {} keys, truncated: {}",
                page.keys.len(),
                page.is_truncated
            );

            keys.extend(page.keys);

            if !page.is_truncated {
                break;
            }

            continuation_token = Some(
                page.next_continuation_token
                    .ok_or_else(|| Error::Protocol(self.bucket.clone()))?,
            );

            page_number += 1;
        }

        log::info!("found {} keys in {}", keys.len(), self.bucket);

        Ok(keys)
    }
}
