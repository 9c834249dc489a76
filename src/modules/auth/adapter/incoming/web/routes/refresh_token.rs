use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// The refresh token obtained at login or from a previous refresh
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseDto {
    access_token: String,
    refresh_token: String,
    #[schema(example = "bearer")]
    token_type: String,
}

/// Rotate a refresh token
///
/// Exchanges a valid refresh token for a new access/refresh pair. The old
/// refresh token is invalidated; presenting a stale one also revokes the
/// current one.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New token pair issued",
            body = inline(SuccessResponse<RefreshTokenResponseDto>)
        ),
        (
            status = 401,
            description = "Invalid, expired or superseded refresh token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_REFRESH_TOKEN",
                    "message": "Could not validate credentials"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.refresh_token_use_case;

    info!("Token refresh attempt");

    match use_case.execute(&req.refresh_token).await {
        Ok(response) => {
            info!("Token refreshed successfully");
            ApiResponse::success(RefreshTokenResponseDto {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
                token_type: response.token_type,
            })
        }

        Err(RefreshTokenError::InvalidToken) => {
            warn!("Token refresh failed: invalid token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Could not validate credentials")
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::QueryError(ref e))
        | Err(RefreshTokenError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during token refresh");
            ApiResponse::internal_error()
        }
    }
}
