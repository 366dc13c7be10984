use crate::cloud::{Error, ObjectStore, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObject {
    pub bucket: String,
    pub key: String,
    pub file: PathBuf,
}

impl PutObject {
    /// If `key` is empty the object is stored under the file name.
    #[must_use]
    pub fn new(bucket: &str, key: &str, file: &Path) -> Self {
        let key = if key.is_empty() {
            file.file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default()
        } else {
            key.to_string()
        };

        Self {
            bucket: bucket.to_string(),
            key,
            file: file.to_path_buf(),
        }
    }

    /// # Errors
    ///
    /// Will return `Error::FileOpen` if the file can not be opened
    pub async fn open(&self) -> Result<File> {
        File::open(&self.file).await.map_err(|source| Error::FileOpen {
            path: self.file.clone(),
            source,
        })
    }

    /// Sends the opened file; the handle is dropped when this returns.
    ///
    /// # Errors
    ///
    /// Will return `Error::Upload` if the store rejects the object
    pub async fn request<S: ObjectStore + ?Sized>(&self, store: &S, file: File) -> Result<()> {
        log::info!(
            "uploading {} to {}/{}",
            self.file.display(),
            self.bucket,
            self.key
        );

        store.put_object(&self.bucket, &self.key, file).await
    }
}
