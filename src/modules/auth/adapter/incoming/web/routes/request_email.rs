use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::request_email::RequestEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RequestEmailDto {
    #[schema(example = "john@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct RequestEmailResponse {
    #[schema(example = "Check your email for confirmation link.")]
    message: String,
}

/// Re-send the confirmation email
///
/// Always answers with the same message so the endpoint cannot be used to
/// check whether an address is registered.
#[utoipa::path(
    post,
    path = "/api/auth/request_email",
    tag = "auth",
    request_body = RequestEmailDto,
    responses(
        (
            status = 200,
            description = "Request accepted",
            body = inline(SuccessResponse<RequestEmailResponse>),
            example = json!({
                "success": true,
                "data": { "message": "Check your email for confirmation link." }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/request_email")]
pub async fn request_email_handler(
    req: web::Json<RequestEmailDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.request_email_use_case;

    info!("Confirmation email requested");

    match use_case.execute(&req.email).await {
        Ok(_) => ApiResponse::success(RequestEmailResponse {
            message: "Check your email for confirmation link.".to_string(),
        }),

        Err(RequestEmailError::QueryError(ref e)) => {
            error!(error = %e, "Database error during email request");
            ApiResponse::internal_error()
        }

        Err(RequestEmailError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during email request");
            ApiResponse::internal_error()
        }
    }
}
