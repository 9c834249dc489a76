use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::update_avatar::{UpdateAvatarError, UpdateAvatarResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct UpdateAvatarDto {
    /// MIME type of the image the client is about to upload
    #[schema(example = "image/png")]
    pub content_type: String,
}

/// Update the avatar
///
/// Returns a signed upload URL for the image bytes and records the public
/// URL on the profile. The client PUTs the file to `upload_url` afterwards.
#[utoipa::path(
    post,
    path = "/api/users/avatar",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateAvatarDto,
    responses(
        (
            status = 200,
            description = "Upload prepared and profile updated",
            body = inline(SuccessResponse<UpdateAvatarResponse>)
        ),
        (
            status = 400,
            description = "Unsupported image type",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "UNSUPPORTED_MEDIA_TYPE",
                    "message": "Unsupported image type: image/gif"
                }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/avatar")]
pub async fn update_avatar_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateAvatarDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.update_avatar_use_case;

    info!(user_id = %user.user_id, content_type = %req.content_type, "Avatar update requested");

    match use_case.execute(user.user_id, &req.content_type).await {
        Ok(response) => ApiResponse::success(response),

        Err(UpdateAvatarError::UnsupportedContentType(ref e)) => {
            warn!(content_type = %e, "Avatar update rejected: unsupported type");
            ApiResponse::bad_request(
                "UNSUPPORTED_MEDIA_TYPE",
                &format!("Unsupported image type: {}", e),
            )
        }

        Err(UpdateAvatarError::UserNotFound) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Could not validate credentials")
        }

        Err(UpdateAvatarError::StorageError(ref e)) => {
            error!(error = %e, "Failed to prepare avatar upload");
            ApiResponse::internal_error()
        }

        Err(UpdateAvatarError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during avatar update");
            ApiResponse::internal_error()
        }
    }
}
