use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::ContactRepository;

pub const DEFAULT_PAGE_SIZE: u64 = 100;
pub const MAX_PAGE_SIZE: u64 = 500;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListContactsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, ListContactsError>;
}

pub struct ListContactsUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> ListContactsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListContactsUseCase for ListContactsUseCase<R>
where
    R: ContactRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, ListContactsError> {
        let limit = limit.clamp(1, MAX_PAGE_SIZE);

        self.repository
            .list(user_id, skip, limit)
            .await
            .map_err(|e| ListContactsError::RepositoryError(e.to_string()))
    }
}
