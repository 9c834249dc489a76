use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserRepository,
};
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignupError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Account with this email already exists")]
    EmailAlreadyExists,
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISignupUseCase: Send + Sync {
    async fn execute(&self, request: SignupRequest) -> Result<User, SignupError>;
}

pub struct SignupUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    email_notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> SignupUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
        email_notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
            email_notifier,
        }
    }

    fn validate(request: &SignupRequest) -> Result<(), SignupError> {
        let username = request.username.trim();
        if username.len() < 4 || username.len() > 50 {
            return Err(SignupError::InvalidUsername(
                "Username must be between 4 and 50 characters".to_string(),
            ));
        }

        if !EmailAddress::is_valid(request.email.trim()) {
            return Err(SignupError::InvalidEmail(
                "Email address is not valid".to_string(),
            ));
        }

        if request.password.len() < 6 {
            return Err(SignupError::InvalidPassword(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl<Q, R> ISignupUseCase for SignupUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, request: SignupRequest) -> Result<User, SignupError> {
        Self::validate(&request)?;

        let email = request.email.trim().to_lowercase();

        if let Some(_existing) = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?
        {
            return Err(SignupError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .map_err(|e| SignupError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                username: request.username.trim().to_string(),
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                crate::auth::application::ports::outgoing::UserRepositoryError::EmailAlreadyExists => {
                    SignupError::EmailAlreadyExists
                }
                other => SignupError::RepositoryError(other.to_string()),
            })?;

        // Confirmation email is best-effort: the account exists either way
        // and the token can be re-requested.
        match self.token_provider.issue_email_token(user.id) {
            Ok(token) => {
                if let Err(e) = self
                    .email_notifier
                    .send_confirmation_email(&user.email, &user.username, &token)
                    .await
                {
                    tracing::warn!(email = %user.email, error = %e, "Failed to send confirmation email");
                }
            }
            Err(e) => {
                tracing::warn!(email = %user.email, error = %e, "Failed to issue email token");
            }
        }

        Ok(user)
    }
}
