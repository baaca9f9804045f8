use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage service URL or credential is not configured")]
    NotConfigured,

    #[error("{0}")]
    UploadFailed(String),
}

/// Repository trait for the object store holding generated audio
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Store `content` under `key`. With `upsert` an existing object with the
    /// same key is replaced instead of failing.
    async fn upload(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError>;

    /// Publicly reachable URL for `key`
    fn public_url(&self, key: &str) -> Result<String, StorageError>;
}
