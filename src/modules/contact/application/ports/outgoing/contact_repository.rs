use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::contact::application::domain::entities::Contact;

#[derive(Debug, Clone)]
pub struct CreateContactData {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub additional_data: Option<String>,
}

/// Fields to change on an existing contact. `None` leaves the stored
/// value untouched.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.birth_date.is_none()
            && self.additional_data.is_none()
    }
}

/// Case-insensitive substring filters, AND-combined when several are set.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(
        &self,
        user_id: Uuid,
        data: CreateContactData,
    ) -> Result<Contact, ContactRepositoryError>;

    /// Contacts owned by `user_id`, paginated, ordered by (created_at, id)
    /// so pages are stable across requests.
    async fn list(
        &self,
        user_id: Uuid,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// All contacts owned by `user_id`, unpaginated. Used by the birthday
    /// query, which filters in process.
    async fn list_all(&self, user_id: Uuid) -> Result<Vec<Contact>, ContactRepositoryError>;

    async fn find_by_id(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<Contact>, ContactRepositoryError>;

    async fn update(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
        patch: ContactPatch,
    ) -> Result<Contact, ContactRepositoryError>;

    /// Removes the contact and returns it.
    async fn delete(
        &self,
        user_id: Uuid,
        contact_id: Uuid,
    ) -> Result<Contact, ContactRepositoryError>;

    async fn search(
        &self,
        user_id: Uuid,
        filter: SearchFilter,
    ) -> Result<Vec<Contact>, ContactRepositoryError>;
}
