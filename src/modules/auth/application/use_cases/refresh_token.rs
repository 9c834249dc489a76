use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery, UserRepository};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Could not validate credentials")]
    InvalidToken,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

pub struct RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRefreshTokenUseCase for RefreshTokenUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let user_id = self
            .token_provider
            .decode_refresh_token(refresh_token)
            .map_err(|_| RefreshTokenError::InvalidToken)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| RefreshTokenError::QueryError(e.to_string()))?
            .ok_or(RefreshTokenError::InvalidToken)?;

        // A token that is valid but no longer the stored one means it was
        // already rotated or revoked. Clear the stored token so the stale
        // one cannot be replayed later.
        if user.refresh_token.as_deref() != Some(refresh_token) {
            self.repository
                .store_refresh_token(user.id, None)
                .await
                .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;
            return Err(RefreshTokenError::InvalidToken);
        }

        let access_token = self
            .token_provider
            .issue_access_token(user.id)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;
        let new_refresh_token = self
            .token_provider
            .issue_refresh_token(user.id)
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))?;

        self.repository
            .store_refresh_token(user.id, Some(new_refresh_token.clone()))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        Ok(RefreshTokenResponse {
            access_token,
            refresh_token: new_refresh_token,
            token_type: "bearer".to_string(),
        })
    }
}
