use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::confirm_email::{ConfirmEmailError, ConfirmEmailOutcome};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ConfirmEmailResponse {
    #[schema(example = "Email confirmed")]
    message: String,
}

/// Confirm an email address
///
/// Target of the link sent in the confirmation email. Idempotent: following
/// the link twice reports the address as already confirmed.
#[utoipa::path(
    get,
    path = "/api/auth/confirmed_email/{token}",
    tag = "auth",
    params(
        ("token" = String, Path, description = "Email confirmation token")
    ),
    responses(
        (
            status = 200,
            description = "Email confirmed (or was already confirmed)",
            body = inline(SuccessResponse<ConfirmEmailResponse>)
        ),
        (
            status = 400,
            description = "Token subject no longer exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VERIFICATION_ERROR",
                    "message": "Verification error"
                }
            })
        ),
        (
            status = 422,
            description = "Token is not a valid email confirmation token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_EMAIL_TOKEN",
                    "message": "Invalid token for email verification"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/confirmed_email/{token}")]
pub async fn confirm_email_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.confirm_email_use_case;
    let token = path.into_inner();

    info!("Email confirmation attempt");

    match use_case.execute(&token).await {
        Ok(ConfirmEmailOutcome::Confirmed) => {
            info!("Email confirmed");
            ApiResponse::success(ConfirmEmailResponse {
                message: "Email confirmed".to_string(),
            })
        }

        Ok(ConfirmEmailOutcome::AlreadyConfirmed) => {
            info!("Email was already confirmed");
            ApiResponse::success(ConfirmEmailResponse {
                message: "Your email is already confirmed".to_string(),
            })
        }

        Err(ConfirmEmailError::InvalidToken) => {
            warn!("Email confirmation failed: invalid token");
            ApiResponse::unprocessable_entity(
                "INVALID_EMAIL_TOKEN",
                "Invalid token for email verification",
            )
        }

        Err(ConfirmEmailError::UserNotFound) => {
            warn!("Email confirmation failed: unknown user");
            ApiResponse::bad_request("VERIFICATION_ERROR", "Verification error")
        }

        Err(ConfirmEmailError::QueryError(ref e))
        | Err(ConfirmEmailError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during email confirmation");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::confirm_email::IConfirmEmailUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::load_test_env;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockConfirm {
        result: Result<ConfirmEmailOutcome, ConfirmEmailError>,
    }

    #[async_trait]
    impl IConfirmEmailUseCase for MockConfirm {
        async fn execute(&self, _token: &str) -> Result<ConfirmEmailOutcome, ConfirmEmailError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<ConfirmEmailOutcome, ConfirmEmailError>) -> (u16, serde_json::Value) {
        load_test_env();
        let app_state = TestAppStateBuilder::default()
            .with_confirm_email(MockConfirm { result })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(confirm_email_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/confirmed_email/some-token")
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_confirm_email_success() {
        let (status, body) = call(Ok(ConfirmEmailOutcome::Confirmed)).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["message"], "Email confirmed");
    }

    #[actix_web::test]
    async fn test_confirm_email_already_confirmed() {
        let (status, body) = call(Ok(ConfirmEmailOutcome::AlreadyConfirmed)).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["message"], "Your email is already confirmed");
    }

    #[actix_web::test]
    async fn test_confirm_email_invalid_token() {
        let (status, body) = call(Err(ConfirmEmailError::InvalidToken)).await;
        assert_eq!(status, 422);
        assert_eq!(body["error"]["code"], "INVALID_EMAIL_TOKEN");
    }

    #[actix_web::test]
    async fn test_confirm_email_unknown_user() {
        let (status, body) = call(Err(ConfirmEmailError::UserNotFound)).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VERIFICATION_ERROR");
    }
}
