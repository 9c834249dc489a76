use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::ThrottledUser;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::use_cases::list_contacts::{
    ListContactsError, DEFAULT_PAGE_SIZE,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ListContactsQuery {
    /// Number of contacts to skip
    #[serde(default)]
    pub skip: u64,

    /// Maximum number of contacts to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// List contacts
///
/// Contacts owned by the caller, offset-paginated, oldest first.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(ListContactsQuery),
    responses(
        (status = 200, description = "Owned contacts", body = inline(SuccessResponse<Vec<Contact>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/contacts")]
pub async fn list_contacts_handler(
    user: ThrottledUser,
    query: web::Query<ListContactsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_contacts_use_case
        .execute(user.user_id, query.skip, query.limit)
        .await
    {
        Ok(contacts) => ApiResponse::success(contacts),

        Err(ListContactsError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing contacts");
            ApiResponse::internal_error()
        }
    }
}
