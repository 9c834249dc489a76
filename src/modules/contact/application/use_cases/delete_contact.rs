use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::{ContactRepository, ContactRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContactError {
    #[error("Contact not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteContactUseCase: Send + Sync {
    /// Removes the contact and returns its last state.
    async fn execute(&self, user_id: Uuid, contact_id: Uuid)
        -> Result<Contact, DeleteContactError>;
}

pub struct DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteContactUseCase for DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Contact, DeleteContactError> {
        self.repository
            .delete(user_id, contact_id)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => DeleteContactError::NotFound,
                other => DeleteContactError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::application::testing::{contact_for, InMemoryContactRepository};

    #[tokio::test]
    async fn test_delete_removes_and_returns_contact() {
        let owner = Uuid::new_v4();
        let contact = contact_for(owner, "Alice", "Smith");
        let contact_id = contact.id;

        let use_case =
            DeleteContactUseCase::new(InMemoryContactRepository::with_contacts(vec![contact]));

        let deleted = use_case.execute(owner, contact_id).await.unwrap();
        assert_eq!(deleted.id, contact_id);
        assert!(use_case.repository.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unowned_contact_is_not_found() {
        let owner = Uuid::new_v4();
        let contact = contact_for(owner, "Alice", "Smith");
        let contact_id = contact.id;

        let use_case =
            DeleteContactUseCase::new(InMemoryContactRepository::with_contacts(vec![contact]));

        let result = use_case.execute(Uuid::new_v4(), contact_id).await;
        assert!(matches!(result, Err(DeleteContactError::NotFound)));
        assert_eq!(use_case.repository.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let owner = Uuid::new_v4();
        let contact = contact_for(owner, "Alice", "Smith");
        let contact_id = contact.id;

        let use_case =
            DeleteContactUseCase::new(InMemoryContactRepository::with_contacts(vec![contact]));

        use_case.execute(owner, contact_id).await.unwrap();
        let result = use_case.execute(owner, contact_id).await;
        assert!(matches!(result, Err(DeleteContactError::NotFound)));
    }
}
