use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::ThrottledUser;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::use_cases::upcoming_birthdays::UpcomingBirthdaysError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::Utc;
use tracing::{error, info};

/// Contacts with upcoming birthdays
///
/// Returns contacts whose birthday falls within the next 7 days,
/// today included. The birth year is ignored.
#[utoipa::path(
    get,
    path = "/api/contacts/birthdays",
    tag = "contacts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Contacts with a birthday in the window", body = inline(SuccessResponse<Vec<Contact>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/contacts/birthdays")]
pub async fn upcoming_birthdays_handler(
    user: ThrottledUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let today = Utc::now().date_naive();

    info!(user_id = %user.user_id, %today, "Listing upcoming birthdays");

    match data
        .upcoming_birthdays_use_case
        .execute(user.user_id, today)
        .await
    {
        Ok(contacts) => ApiResponse::success(contacts),

        Err(UpcomingBirthdaysError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error listing upcoming birthdays");
            ApiResponse::internal_error()
        }
    }
}
