use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::contact::application::domain::birthday::BirthdayWindow;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::ContactRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpcomingBirthdaysError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Contacts whose birthday (month and day, year ignored) falls within the
/// next seven days starting from `today`. The reference date is an argument
/// so callers decide what "today" means; the route passes the current UTC
/// date.
#[async_trait]
pub trait IUpcomingBirthdaysUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<Contact>, UpcomingBirthdaysError>;
}

pub struct UpcomingBirthdaysUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> UpcomingBirthdaysUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpcomingBirthdaysUseCase for UpcomingBirthdaysUseCase<R>
where
    R: ContactRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<Contact>, UpcomingBirthdaysError> {
        let window = BirthdayWindow::starting(today);

        let contacts = self
            .repository
            .list_all(user_id)
            .await
            .map_err(|e| UpcomingBirthdaysError::RepositoryError(e.to_string()))?;

        Ok(contacts
            .into_iter()
            .filter(|c| window.contains_birthday(c.birth_date))
            .collect())
    }
}
