use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, UserProfile};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Current user profile
///
/// Returns the profile of the access token's owner. A syntactically valid
/// token whose user row no longer exists is rejected like any other bad
/// credential.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Profile of the authenticated user",
            body = inline(SuccessResponse<UserProfile>)
        ),
        (status = 401, description = "Missing, invalid or orphaned token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/me")]
pub async fn fetch_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Could not validate credentials")
        }

        Err(FetchProfileError::QueryError(ref e)) => {
            error!(error = %e, "Database error fetching user profile");
            ApiResponse::internal_error()
        }
    }
}
