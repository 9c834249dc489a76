use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::ThrottledUser;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::use_cases::update_contact::{
    UpdateContactError, UpdateContactRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct UpdateContactDto {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub additional_data: Option<String>,
}

/// Update a contact
///
/// Partial update: only the fields present in the body change.
#[utoipa::path(
    patch,
    path = "/api/contacts/{contact_id}",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(
        ("contact_id" = Uuid, Path, description = "Contact identifier")
    ),
    request_body = UpdateContactDto,
    responses(
        (status = 200, description = "Updated contact", body = inline(SuccessResponse<Contact>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such contact for this user", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/contacts/{contact_id}")]
pub async fn update_contact_handler(
    user: ThrottledUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateContactDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();
    let dto = req.into_inner();

    info!(user_id = %user.user_id, contact_id = %contact_id, "Updating contact");

    let request = UpdateContactRequest {
        name: dto.name,
        surname: dto.surname,
        email: dto.email,
        phone: dto.phone,
        birth_date: dto.birth_date,
        additional_data: dto.additional_data,
    };

    match data
        .update_contact_use_case
        .execute(user.user_id, contact_id, request)
        .await
    {
        Ok(contact) => ApiResponse::success(contact),

        Err(UpdateContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(UpdateContactError::Validation(ref msg)) => {
            warn!(error = %msg, "Contact update rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", msg)
        }

        Err(UpdateContactError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error updating contact");
            ApiResponse::internal_error()
        }
    }
}
