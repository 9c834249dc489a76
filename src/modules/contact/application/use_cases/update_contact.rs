use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::{
    ContactPatch, ContactRepository, ContactRepositoryError,
};
use crate::contact::application::use_cases::create_contact::{
    validate_additional_data, validate_email, validate_name, validate_phone, validate_surname,
};

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContactError {
    #[error("Contact not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateContactUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
        request: UpdateContactRequest,
    ) -> Result<Contact, UpdateContactError>;
}

pub struct UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn validate(request: &UpdateContactRequest) -> Result<(), UpdateContactError> {
        if let Some(name) = &request.name {
            validate_name(name).map_err(UpdateContactError::Validation)?;
        }
        if let Some(surname) = &request.surname {
            validate_surname(surname).map_err(UpdateContactError::Validation)?;
        }
        if let Some(email) = &request.email {
            validate_email(email).map_err(UpdateContactError::Validation)?;
        }
        if let Some(phone) = &request.phone {
            validate_phone(phone).map_err(UpdateContactError::Validation)?;
        }
        if let Some(data) = &request.additional_data {
            validate_additional_data(data).map_err(UpdateContactError::Validation)?;
        }
        Ok(())
    }
}

#[async_trait]
impl<R> IUpdateContactUseCase for UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
        request: UpdateContactRequest,
    ) -> Result<Contact, UpdateContactError> {
        Self::validate(&request)?;

        let patch = ContactPatch {
            name: request.name,
            surname: request.surname,
            email: request.email.map(|e| e.to_lowercase()),
            phone: request.phone,
            birth_date: request.birth_date,
            additional_data: request.additional_data,
        };

        // An empty patch is a read: the stored row is returned unchanged.
        if patch.is_empty() {
            return self
                .repository
                .find_by_id(user_id, contact_id)
                .await
                .map_err(|e| UpdateContactError::RepositoryError(e.to_string()))?
                .ok_or(UpdateContactError::NotFound);
        }

        self.repository
            .update(user_id, contact_id, patch)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => UpdateContactError::NotFound,
                other => UpdateContactError::RepositoryError(other.to_string()),
            })
    }
}
