use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account record. Never hard-deleted; mutated on login (refresh-token
/// rotation), email confirmation and avatar update.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub avatar: Option<String>,
    pub refresh_token: Option<String>,
    pub confirmed: bool,
}
