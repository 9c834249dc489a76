use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::fetch_profile::UserProfile;
use crate::auth::application::use_cases::signup_user::{SignupError, SignupRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    /// Display name, 4 to 50 characters
    #[schema(example = "johndoe")]
    pub username: String,

    /// Email address, must be unique
    #[schema(example = "john@example.com")]
    pub email: String,

    /// Password, at least 6 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Register a new account
///
/// Creates the user and sends a confirmation email. The account cannot log
/// in until the emailed link is followed.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<UserProfile>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "johndoe",
                    "email": "john@example.com",
                    "created_at": "2025-08-10T12:00:00Z",
                    "avatar": null,
                    "confirmed": false
                }
            })
        ),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Password must be at least 6 characters"
                }
            })
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "Account with this email already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_user_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.signup_use_case;
    let dto = req.into_inner();

    info!(email = %dto.email, username = %dto.username, "Signup attempt");

    let request = SignupRequest {
        username: dto.username,
        email: dto.email,
        password: dto.password,
    };

    match use_case.execute(request).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created(UserProfile::from(user))
        }

        Err(SignupError::EmailAlreadyExists) => {
            warn!("Signup rejected: email already exists");
            ApiResponse::conflict(
                "EMAIL_ALREADY_EXISTS",
                "Account with this email already exists",
            )
        }

        Err(
            e @ (SignupError::InvalidUsername(_)
            | SignupError::InvalidEmail(_)
            | SignupError::InvalidPassword(_)),
        ) => {
            warn!(error = %e, "Signup rejected: validation failed");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(SignupError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(SignupError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during signup");
            ApiResponse::internal_error()
        }
    }
}
