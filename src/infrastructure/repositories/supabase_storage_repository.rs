use super::storage_repository::{StorageError, StorageRepository};
use async_trait::async_trait;
use serde::Deserialize;

const CACHE_CONTROL: &str = "max-age=3600";

/// Error body returned by the storage API
#[derive(Debug, Deserialize)]
struct StorageApiError {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
struct StorageCredentials {
    base_url: String,
    service_role_key: String,
}

/// Supabase Storage implementation of storage repository
pub struct SupabaseStorageRepository {
    http_client: reqwest::Client,
    credentials: Option<StorageCredentials>,
    bucket: String,
}

impl SupabaseStorageRepository {
    pub fn new(
        http_client: reqwest::Client,
        supabase_url: Option<String>,
        service_role_key: Option<String>,
        bucket: String,
    ) -> Self {
        let credentials = match (supabase_url, service_role_key) {
            (Some(url), Some(key)) => Some(StorageCredentials {
                base_url: url.trim_end_matches('/').to_string(),
                service_role_key: key,
            }),
            _ => None,
        };

        Self {
            http_client,
            credentials,
            bucket,
        }
    }

    fn credentials(&self) -> Result<&StorageCredentials, StorageError> {
        self.credentials.as_ref().ok_or_else(|| {
            tracing::error!("Supabase environment variables not set");
            StorageError::NotConfigured
        })
    }

    fn object_path(&self, key: &str) -> String {
        format!("{}/{}", self.bucket, urlencoding::encode(key))
    }

    /// Pull a readable message out of a failed upload response
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        match serde_json::from_str::<StorageApiError>(&text) {
            Ok(StorageApiError {
                message: Some(message),
                ..
            }) => message,
            Ok(StorageApiError {
                error: Some(error), ..
            }) => error,
            _ if !text.trim().is_empty() => text,
            _ => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }
}

#[async_trait]
impl StorageRepository for SupabaseStorageRepository {
    async fn upload(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/storage/v1/object/{}",
            credentials.base_url,
            self.object_path(key)
        );
        let size = content.len();

        tracing::info!(
            bucket = %self.bucket,
            key = key,
            size_bytes = size,
            upsert = upsert,
            "Uploading audio to storage"
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&credentials.service_role_key)
            .header("apikey", &credentials.service_role_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(reqwest::header::CACHE_CONTROL, CACHE_CONTROL)
            .header("x-upsert", upsert.to_string())
            .body(content)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Storage upload request failed");
                StorageError::UploadFailed(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = Self::error_message(response).await;
            tracing::error!(status = status, error_message = %message, "Storage upload error");
            return Err(StorageError::UploadFailed(message));
        }

        tracing::debug!(key = key, size_bytes = size, "Storage upload completed");

        Ok(())
    }

    fn public_url(&self, key: &str) -> Result<String, StorageError> {
        let credentials = self.credentials()?;
        Ok(format!(
            "{}/storage/v1/object/public/{}",
            credentials.base_url,
            self.object_path(key)
        ))
    }
}
