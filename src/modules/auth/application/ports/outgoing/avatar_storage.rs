use async_trait::async_trait;
use uuid::Uuid;

/// Where the client should PUT the avatar bytes, and the URL the profile
/// will serve afterwards.
#[derive(Debug, Clone)]
pub struct AvatarUploadTarget {
    pub upload_url: String,
    pub public_url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AvatarStorageError {
    #[error("Unsupported avatar content type: {0}")]
    UnsupportedContentType(String),
    #[error("Failed to sign upload URL: {0}")]
    SignFailed(String),
}

#[async_trait]
pub trait AvatarStorage: Send + Sync {
    async fn prepare_upload(
        &self,
        user_id: Uuid,
        content_type: &str,
    ) -> Result<AvatarUploadTarget, AvatarStorageError>;
}
