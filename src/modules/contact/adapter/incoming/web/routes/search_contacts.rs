use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::ThrottledUser;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::ports::outgoing::SearchFilter;
use crate::contact::application::use_cases::search_contacts::SearchContactsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
pub struct SearchContactsQuery {
    /// Case-insensitive substring match on the contact name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the surname.
    pub surname: Option<String>,
    /// Case-insensitive substring match on the email address.
    pub email: Option<String>,
}

/// Search contacts
///
/// Filters combine with AND. Without any filter this behaves like listing.
#[utoipa::path(
    get,
    path = "/api/contacts/search",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(SearchContactsQuery),
    responses(
        (status = 200, description = "Matching contacts", body = inline(SuccessResponse<Vec<Contact>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/contacts/search")]
pub async fn search_contacts_handler(
    user: ThrottledUser,
    query: web::Query<SearchContactsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    info!(user_id = %user.user_id, "Searching contacts");

    let filter = SearchFilter {
        name: query.name,
        surname: query.surname,
        email: query.email,
    };

    match data
        .search_contacts_use_case
        .execute(user.user_id, filter)
        .await
    {
        Ok(contacts) => ApiResponse::success(contacts),

        Err(SearchContactsError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error searching contacts");
            ApiResponse::internal_error()
        }
    }
}
