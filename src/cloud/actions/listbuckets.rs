use crate::cloud::{ObjectStore, Result};

#[derive(Debug, Default)]
pub struct ListBuckets {}

impl ListBuckets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request<S: ObjectStore + ?Sized>(&self, store: &S) -> Result<Vec<String>> {
        let buckets = store.list_buckets().await?;
        log::info!("found {} buckets", buckets.len());
        Ok(buckets)
    }
}
