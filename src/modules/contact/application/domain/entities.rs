use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A contact owned by a single user. Ownership is enforced at the
/// repository level: every query is scoped by `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub additional_data: Option<String>,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
