use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery};
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;

/// Outcome is deliberately the same whether the address exists, was already
/// confirmed, or got a fresh confirmation email. The route returns one
/// generic message so the endpoint cannot be used to probe for accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestEmailOutcome {
    Sent,
    AlreadyConfirmed,
    UnknownEmail,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestEmailError {
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[async_trait]
pub trait IRequestEmailUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<RequestEmailOutcome, RequestEmailError>;
}

pub struct RequestEmailUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q> RequestEmailUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        token_provider: Arc<dyn TokenProvider>,
        email_notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            query,
            token_provider,
            email_notifier,
        }
    }
}

#[async_trait]
impl<Q> IRequestEmailUseCase for RequestEmailUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, email: &str) -> Result<RequestEmailOutcome, RequestEmailError> {
        let email = email.trim().to_lowercase();

        let user = match self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| RequestEmailError::QueryError(e.to_string()))?
        {
            Some(user) => user,
            None => return Ok(RequestEmailOutcome::UnknownEmail),
        };

        if user.confirmed {
            return Ok(RequestEmailOutcome::AlreadyConfirmed);
        }

        let token = self
            .token_provider
            .issue_email_token(user.id)
            .map_err(|e| RequestEmailError::TokenGenerationFailed(e.to_string()))?;

        if let Err(e) = self
            .email_notifier
            .send_confirmation_email(&user.email, &user.username, &token)
            .await
        {
            tracing::warn!("Failed to send confirmation email to {}: {}", user.email, e);
        }

        Ok(RequestEmailOutcome::Sent)
    }
}
