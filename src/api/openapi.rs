use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::login_user::LoginRequestDto;
use crate::auth::adapter::incoming::web::routes::refresh_token::{
    RefreshTokenRequestDto, RefreshTokenResponseDto,
};
use crate::auth::adapter::incoming::web::routes::request_email::RequestEmailDto;
use crate::auth::adapter::incoming::web::routes::signup_user::SignupRequestDto;
use crate::auth::adapter::incoming::web::routes::update_avatar::UpdateAvatarDto;
use crate::auth::application::use_cases::fetch_profile::UserProfile;
use crate::auth::application::use_cases::login_user::LoginUserResponse;
use crate::auth::application::use_cases::update_avatar::UpdateAvatarResponse;
use crate::contact::adapter::incoming::web::routes::create_contact::CreateContactDto;
use crate::contact::adapter::incoming::web::routes::update_contact::UpdateContactDto;
use crate::contact::application::domain::entities::Contact;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        version = "1.0.0",
        description = "REST backend for personal contact management with JWT authentication",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup_user::signup_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::confirm_email::confirm_email_handler,
        crate::auth::adapter::incoming::web::routes::request_email::request_email_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::fetch_user::fetch_user_handler,
        crate::auth::adapter::incoming::web::routes::update_avatar::update_avatar_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::list_contacts::list_contacts_handler,
        crate::contact::adapter::incoming::web::routes::create_contact::create_contact_handler,
        crate::contact::adapter::incoming::web::routes::search_contacts::search_contacts_handler,
        crate::contact::adapter::incoming::web::routes::upcoming_birthdays::upcoming_birthdays_handler,
        crate::contact::adapter::incoming::web::routes::get_contact::get_contact_handler,
        crate::contact::adapter::incoming::web::routes::update_contact::update_contact_handler,
        crate::contact::adapter::incoming::web::routes::delete_contact::delete_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<UserProfile>,
            SuccessResponse<Contact>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            SignupRequestDto,
            LoginRequestDto,
            LoginUserResponse,
            RefreshTokenRequestDto,
            RefreshTokenResponseDto,
            RequestEmailDto,
            UserProfile,
            UpdateAvatarDto,
            UpdateAvatarResponse,

            // Contact DTOs
            Contact,
            CreateContactDto,
            UpdateContactDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, login, token refresh and email confirmation"),
        (name = "users", description = "Current user profile and avatar"),
        (name = "contacts", description = "Per-user contact management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the login endpoint"))
                        .build(),
                ),
            )
        }
    }
}
