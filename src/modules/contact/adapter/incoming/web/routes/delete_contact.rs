use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::ThrottledUser;
use crate::contact::application::domain::entities::Contact;
use crate::contact::application::use_cases::delete_contact::DeleteContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

/// Delete a contact
///
/// Returns the removed contact in the response body.
#[utoipa::path(
    delete,
    path = "/api/contacts/{contact_id}",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(
        ("contact_id" = Uuid, Path, description = "Contact identifier")
    ),
    responses(
        (status = 200, description = "Deleted contact", body = inline(SuccessResponse<Contact>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such contact for this user", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/contacts/{contact_id}")]
pub async fn delete_contact_handler(
    user: ThrottledUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let contact_id = path.into_inner();

    info!(user_id = %user.user_id, contact_id = %contact_id, "Deleting contact");

    match data
        .delete_contact_use_case
        .execute(user.user_id, contact_id)
        .await
    {
        Ok(contact) => ApiResponse::success(contact),

        Err(DeleteContactError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact not found")
        }

        Err(DeleteContactError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error deleting contact");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::application::use_cases::delete_contact::IDeleteContactUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::access_token_provider;
    use crate::tests::support::load_test_env;
    use crate::tests::support::stubs::allow_all_limiter;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    struct MockDeleteContact {
        result: Result<Contact, DeleteContactError>,
    }

    #[async_trait]
    impl IDeleteContactUseCase for MockDeleteContact {
        async fn execute(
            &self,
            _user_id: Uuid,
            _contact_id: Uuid,
        ) -> Result<Contact, DeleteContactError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<Contact, DeleteContactError>) -> (u16, serde_json::Value) {
        load_test_env();
        let user_id = Uuid::new_v4();
        let app_state = TestAppStateBuilder::default()
            .with_delete_contact(MockDeleteContact { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(access_token_provider(user_id))
                .app_data(allow_all_limiter())
                .service(delete_contact_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/contacts/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer some.access.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_delete_contact_returns_removed_contact() {
        let contact = Contact {
            id: Uuid::new_v4(),
            name: "Marek".to_string(),
            surname: "Kowal".to_string(),
            email: "marek@example.com".to_string(),
            phone: "+48123456789".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 2, 3).unwrap(),
            additional_data: None,
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let (status, body) = call(Ok(contact.clone())).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["id"], contact.id.to_string());
        assert_eq!(body["data"]["name"], "Marek");
    }

    #[actix_web::test]
    async fn test_delete_contact_not_found() {
        let (status, body) = call(Err(DeleteContactError::NotFound)).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "CONTACT_NOT_FOUND");
    }
}
