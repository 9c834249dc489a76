use async_trait::async_trait;
use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;

use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::{
    ContactRepository, CreateContactData,
};

pub const NAME_MAX: usize = 30;
pub const SURNAME_MAX: usize = 30;
pub const EMAIL_MAX: usize = 80;
pub const PHONE_MAX: usize = 20;
pub const ADDITIONAL_DATA_MAX: usize = 150;

#[derive(Debug, Clone)]
pub struct CreateContactRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub additional_data: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactError {
    #[error("{0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > NAME_MAX {
        return Err(format!("Name cannot exceed {} characters", NAME_MAX));
    }
    Ok(())
}

pub(crate) fn validate_surname(surname: &str) -> Result<(), String> {
    if surname.trim().is_empty() {
        return Err("Surname cannot be empty".to_string());
    }
    if surname.len() > SURNAME_MAX {
        return Err(format!("Surname cannot exceed {} characters", SURNAME_MAX));
    }
    Ok(())
}

pub(crate) fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > EMAIL_MAX {
        return Err(format!("Email cannot exceed {} characters", EMAIL_MAX));
    }
    if !EmailAddress::is_valid(email) {
        return Err("Email address is not valid".to_string());
    }
    Ok(())
}

/// Digits with an optional leading `+`, allowing spaces, dots, dashes
/// and parentheses as separators.
fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\+?[0-9][0-9 .\-()]*$").expect("valid phone pattern")
    })
}

pub(crate) fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.trim().is_empty() {
        return Err("Phone cannot be empty".to_string());
    }
    if phone.len() > PHONE_MAX {
        return Err(format!("Phone cannot exceed {} characters", PHONE_MAX));
    }
    if !phone_pattern().is_match(phone) {
        return Err("Phone number is not valid".to_string());
    }
    Ok(())
}

pub(crate) fn validate_additional_data(data: &str) -> Result<(), String> {
    if data.len() > ADDITIONAL_DATA_MAX {
        return Err(format!(
            "Additional data cannot exceed {} characters",
            ADDITIONAL_DATA_MAX
        ));
    }
    Ok(())
}

#[async_trait]
pub trait ICreateContactUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: uuid::Uuid,
        request: CreateContactRequest,
    ) -> Result<Contact, CreateContactError>;
}

pub struct CreateContactUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> CreateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn validate(request: &CreateContactRequest) -> Result<(), CreateContactError> {
        validate_name(&request.name).map_err(CreateContactError::Validation)?;
        validate_surname(&request.surname).map_err(CreateContactError::Validation)?;
        validate_email(&request.email).map_err(CreateContactError::Validation)?;
        validate_phone(&request.phone).map_err(CreateContactError::Validation)?;
        if let Some(data) = &request.additional_data {
            validate_additional_data(data).map_err(CreateContactError::Validation)?;
        }
        Ok(())
    }
}

#[async_trait]
impl<R> ICreateContactUseCase for CreateContactUseCase<R>
where
    R: ContactRepository,
{
    async fn execute(
        &self,
        user_id: uuid::Uuid,
        request: CreateContactRequest,
    ) -> Result<Contact, CreateContactError> {
        Self::validate(&request)?;

        self.repository
            .create(
                user_id,
                CreateContactData {
                    name: request.name,
                    surname: request.surname,
                    email: request.email.to_lowercase(),
                    phone: request.phone,
                    birth_date: request.birth_date,
                    additional_data: request.additional_data,
                },
            )
            .await
            .map_err(|e| CreateContactError::RepositoryError(e.to_string()))
    }
}
