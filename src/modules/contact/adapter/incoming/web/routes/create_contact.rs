use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::ThrottledUser;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::use_cases::create_contact::{
    CreateContactError, CreateContactRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateContactDto {
    /// First name, up to 30 characters
    #[schema(example = "Jane")]
    pub name: String,

    /// Last name, up to 30 characters
    #[schema(example = "Doe")]
    pub surname: String,

    /// Email address, up to 80 characters
    #[schema(example = "jane.doe@example.com")]
    pub email: String,

    /// Phone number, up to 20 characters
    #[schema(example = "+380501234567")]
    pub phone: String,

    /// Date of birth
    #[schema(example = "1990-06-15")]
    pub birth_date: NaiveDate,

    /// Free-form note, up to 150 characters
    #[schema(example = "Met at RustConf")]
    pub additional_data: Option<String>,
}

/// Create a contact
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    security(("bearer_auth" = [])),
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact created", body = inline(SuccessResponse<Contact>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Name cannot exceed 30 characters"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contacts")]
pub async fn create_contact_handler(
    user: ThrottledUser,
    req: web::Json<CreateContactDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(user_id = %user.user_id, "Creating contact");

    let request = CreateContactRequest {
        name: dto.name,
        surname: dto.surname,
        email: dto.email,
        phone: dto.phone,
        birth_date: dto.birth_date,
        additional_data: dto.additional_data,
    };

    match data
        .create_contact_use_case
        .execute(user.user_id, request)
        .await
    {
        Ok(contact) => {
            info!(contact_id = %contact.id, "Contact created");
            ApiResponse::created(contact)
        }

        Err(CreateContactError::Validation(ref msg)) => {
            warn!(error = %msg, "Contact creation rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", msg)
        }

        Err(CreateContactError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error creating contact");
            ApiResponse::internal_error()
        }
    }
}
