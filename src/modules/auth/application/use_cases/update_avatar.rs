use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    AvatarStorage, AvatarStorageError, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::fetch_profile::UserProfile;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateAvatarResponse {
    /// Short-lived signed URL the client PUTs the image bytes to.
    pub upload_url: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAvatarError {
    #[error("Unsupported image type: {0}")]
    UnsupportedContentType(String),
    #[error("Could not prepare upload: {0}")]
    StorageError(String),
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateAvatarUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        content_type: &str,
    ) -> Result<UpdateAvatarResponse, UpdateAvatarError>;
}

pub struct UpdateAvatarUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    storage: Arc<dyn AvatarStorage>,
}

impl<R> UpdateAvatarUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, storage: Arc<dyn AvatarStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R> IUpdateAvatarUseCase for UpdateAvatarUseCase<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        content_type: &str,
    ) -> Result<UpdateAvatarResponse, UpdateAvatarError> {
        let target = self
            .storage
            .prepare_upload(user_id, content_type)
            .await
            .map_err(|e| match e {
                AvatarStorageError::UnsupportedContentType(ct) => {
                    UpdateAvatarError::UnsupportedContentType(ct)
                }
                AvatarStorageError::SignFailed(msg) => UpdateAvatarError::StorageError(msg),
            })?;

        let user = self
            .repository
            .update_avatar(user_id, target.public_url)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateAvatarError::UserNotFound,
                other => UpdateAvatarError::RepositoryError(other.to_string()),
            })?;

        Ok(UpdateAvatarResponse {
            upload_url: target.upload_url,
            user: user.into(),
        })
    }
}
