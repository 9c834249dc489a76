use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::ThrottledUser;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::use_cases::get_contact::GetContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Fetch one contact
///
/// 404 covers both a missing id and an id owned by someone else.
#[utoipa::path(
    get,
    path = "/api/contacts/{contact_id}",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(
        ("contact_id" = Uuid, Path, description = "Contact identifier")
    ),
    responses(
        (status = 200, description = "The contact", body = inline(SuccessResponse<Contact>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 404,
            description = "No such contact for this user",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "CONTACT_NOT_FOUND", "message": "Contact not found" }
            })
        ),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/contacts/{contact_id}")]
pub async fn get_contact_handler(
    user: ThrottledUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    match data
        .get_contact_use_case
        .execute(user.user_id, contact_id)
        .await
    {
        Ok(contact) => ApiResponse::success(contact),

        Err(GetContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(GetContactError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error fetching contact");
            ApiResponse::internal_error()
        }
    }
}
