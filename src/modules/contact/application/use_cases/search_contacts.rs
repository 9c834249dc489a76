use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::{ContactRepository, SearchFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchContactsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISearchContactsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        filter: SearchFilter,
    ) -> Result<Vec<Contact>, SearchContactsError>;
}

pub struct SearchContactsUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> SearchContactsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISearchContactsUseCase for SearchContactsUseCase<R>
where
    R: ContactRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        filter: SearchFilter,
    ) -> Result<Vec<Contact>, SearchContactsError> {
        self.repository
            .search(user_id, filter)
            .await
            .map_err(|e| SearchContactsError::RepositoryError(e.to_string()))
    }
}
