use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery, UserRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmEmailOutcome {
    Confirmed,
    AlreadyConfirmed,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfirmEmailError {
    #[error("Invalid token for email verification")]
    InvalidToken,
    #[error("Verification error")]
    UserNotFound,
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IConfirmEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<ConfirmEmailOutcome, ConfirmEmailError>;
}

pub struct ConfirmEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> ConfirmEmailUseCase<Q, R>
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
impl<Q, R> IConfirmEmailUseCase for ConfirmEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, token: &str) -> Result<ConfirmEmailOutcome, ConfirmEmailError> {
        let user_id = self
            .token_provider
            .decode_email_token(token)
            .map_err(|_| ConfirmEmailError::InvalidToken)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ConfirmEmailError::QueryError(e.to_string()))?
            .ok_or(ConfirmEmailError::UserNotFound)?;

        if user.confirmed {
            return Ok(ConfirmEmailOutcome::AlreadyConfirmed);
        }

        self.repository
            .confirm_email(user.id)
            .await
            .map_err(|e| ConfirmEmailError::RepositoryError(e.to_string()))?;

        Ok(ConfirmEmailOutcome::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::{
        CreateUserData, TokenClaims, TokenError, UserQueryError, UserRepositoryError,
    };
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MockQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }
    }

    struct RecordingRepo {
        confirmed: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl UserRepository for RecordingRepo {
        async fn create_user(&self, _user: CreateUserData) -> Result<User, UserRepositoryError> {
            Err(UserRepositoryError::DatabaseError("unused".to_string()))
        }

        async fn store_refresh_token(
            &self,
            _user_id: Uuid,
            _token: Option<String>,
        ) -> Result<(), UserRepositoryError> {
            Ok(())
        }

        async fn confirm_email(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
            self.confirmed.lock().unwrap().push(user_id);
            Ok(())
        }

        async fn update_avatar(
            &self,
            _user_id: Uuid,
            _url: String,
        ) -> Result<User, UserRepositoryError> {
            Err(UserRepositoryError::UserNotFound)
        }
    }

    struct MockTokens {
        decoded: Option<Uuid>,
    }

    impl TokenProvider for MockTokens {
        fn issue_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("access".to_string())
        }

        fn issue_refresh_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("refresh".to_string())
        }

        fn issue_email_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
            Ok("email".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::MalformedToken)
        }

        fn decode_refresh_token(&self, _token: &str) -> Result<Uuid, TokenError> {
            Err(TokenError::MalformedToken)
        }

        fn decode_email_token(&self, _token: &str) -> Result<Uuid, TokenError> {
            self.decoded.ok_or(TokenError::MalformedToken)
        }
    }

    fn user(confirmed: bool) -> User {
        User {
            id: Uuid::new_v4(),
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
            avatar: None,
            refresh_token: None,
            confirmed,
        }
    }

    #[tokio::test]
    async fn test_confirm_marks_user_confirmed() {
        let user = user(false);
        let user_id = user.id;
        let use_case = ConfirmEmailUseCase::new(
            MockQuery { user: Some(user) },
            RecordingRepo {
                confirmed: Mutex::new(Vec::new()),
            },
            Arc::new(MockTokens {
                decoded: Some(user_id),
            }),
        );

        let outcome = use_case.execute("token").await.unwrap();
        assert_eq!(outcome, ConfirmEmailOutcome::Confirmed);
        assert_eq!(
            use_case.repository.confirmed.lock().unwrap().as_slice(),
            &[user_id]
        );
    }

    #[tokio::test]
    async fn test_confirm_already_confirmed_is_idempotent() {
        let user = user(true);
        let user_id = user.id;
        let use_case = ConfirmEmailUseCase::new(
            MockQuery { user: Some(user) },
            RecordingRepo {
                confirmed: Mutex::new(Vec::new()),
            },
            Arc::new(MockTokens {
                decoded: Some(user_id),
            }),
        );

        let outcome = use_case.execute("token").await.unwrap();
        assert_eq!(outcome, ConfirmEmailOutcome::AlreadyConfirmed);
        assert!(use_case.repository.confirmed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_bad_token() {
        let use_case = ConfirmEmailUseCase::new(
            MockQuery {
                user: Some(user(false)),
            },
            RecordingRepo {
                confirmed: Mutex::new(Vec::new()),
            },
            Arc::new(MockTokens { decoded: None }),
        );

        let result = use_case.execute("garbage").await;
        assert!(matches!(result, Err(ConfirmEmailError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_confirm_token_for_unknown_user() {
        let use_case = ConfirmEmailUseCase::new(
            MockQuery { user: None },
            RecordingRepo {
                confirmed: Mutex::new(Vec::new()),
            },
            Arc::new(MockTokens {
                decoded: Some(Uuid::new_v4()),
            }),
        );

        let result = use_case.execute("token").await;
        assert!(matches!(result, Err(ConfirmEmailError::UserNotFound)));
    }
}
