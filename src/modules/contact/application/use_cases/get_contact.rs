use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::ContactRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactError {
    #[error("Contact not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetContactUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, contact_id: Uuid) -> Result<Contact, GetContactError>;
}

pub struct GetContactUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> GetContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetContactUseCase for GetContactUseCase<R>
where
    R: ContactRepository,
{
    async fn execute(&self, user_id: Uuid, contact_id: Uuid) -> Result<Contact, GetContactError> {
        self.repository
            .find_by_id(user_id, contact_id)
            .await
            .map_err(|e| GetContactError::RepositoryError(e.to_string()))?
            .ok_or(GetContactError::NotFound)
    }
}
