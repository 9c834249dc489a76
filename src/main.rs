pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::contact;
pub use modules::email;

use crate::auth::adapter::outgoing::avatar_storage_gcs::GcsAvatarStorage;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::use_cases::{
    confirm_email::{ConfirmEmailUseCase, IConfirmEmailUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    request_email::{IRequestEmailUseCase, RequestEmailUseCase},
    signup_user::{ISignupUseCase, SignupUseCase},
    update_avatar::{IUpdateAvatarUseCase, UpdateAvatarUseCase},
};

use crate::contact::adapter::outgoing::contact_repository_postgres::ContactRepositoryPostgres;
use crate::contact::application::use_cases::{
    create_contact::{CreateContactUseCase, ICreateContactUseCase},
    delete_contact::{DeleteContactUseCase, IDeleteContactUseCase},
    get_contact::{GetContactUseCase, IGetContactUseCase},
    list_contacts::{IListContactsUseCase, ListContactsUseCase},
    search_contacts::{ISearchContactsUseCase, SearchContactsUseCase},
    upcoming_birthdays::{IUpcomingBirthdaysUseCase, UpcomingBirthdaysUseCase},
    update_contact::{IUpdateContactUseCase, UpdateContactUseCase},
};

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::email::services::email_service::UserEmailService;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

// Fixed-window rate limit applied to contact endpoints.
const RATE_LIMIT_MAX_REQUESTS: u32 = 10;
const RATE_LIMIT_WINDOW_SECS: u64 = 60;

#[derive(Clone)]
pub struct AppState {
    pub signup_use_case: Arc<dyn ISignupUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub confirm_email_use_case: Arc<dyn IConfirmEmailUseCase + Send + Sync>,
    pub request_email_use_case: Arc<dyn IRequestEmailUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_avatar_use_case: Arc<dyn IUpdateAvatarUseCase + Send + Sync>,
    pub list_contacts_use_case: Arc<dyn IListContactsUseCase + Send + Sync>,
    pub get_contact_use_case: Arc<dyn IGetContactUseCase + Send + Sync>,
    pub create_contact_use_case: Arc<dyn ICreateContactUseCase + Send + Sync>,
    pub update_contact_use_case: Arc<dyn IUpdateContactUseCase + Send + Sync>,
    pub delete_contact_use_case: Arc<dyn IDeleteContactUseCase + Send + Sync>,
    pub search_contacts_use_case: Arc<dyn ISearchContactsUseCase + Send + Sync>,
    pub upcoming_birthdays_use_case: Arc<dyn IUpcomingBirthdaysUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::shared::limiter::{RateLimiter, RedisRateLimiter};
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let app_url = env::var("APP_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));
    let gcs_bucket = env::var("GCS_BUCKET").expect("GCS_BUCKET is not set in .env file");

    // SMTP SETUPS
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);

    let email_sender: Arc<dyn EmailSender> = Arc::new(smtp_sender);
    let email_notifier: Arc<dyn UserEmailNotifier> =
        Arc::new(UserEmailService::new(email_sender, &app_url));

    let password_hasher = Arc::new(BcryptHasher::new());
    let avatar_storage = Arc::new(GcsAvatarStorage::new(gcs_bucket));

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db_arc));

    let signup_use_case = SignupUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        Arc::clone(&token_provider),
        Arc::clone(&email_notifier),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher,
        Arc::clone(&token_provider),
    );
    let refresh_token_use_case = RefreshTokenUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&token_provider),
    );
    let confirm_email_use_case = ConfirmEmailUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&token_provider),
    );
    let request_email_use_case = RequestEmailUseCase::new(
        user_query.clone(),
        Arc::clone(&token_provider),
        Arc::clone(&email_notifier),
    );
    let fetch_profile_use_case = FetchProfileUseCase::new(user_query);
    let update_avatar_use_case = UpdateAvatarUseCase::new(user_repo, avatar_storage);

    let state = AppState {
        signup_use_case: Arc::new(signup_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        confirm_email_use_case: Arc::new(confirm_email_use_case),
        request_email_use_case: Arc::new(request_email_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_avatar_use_case: Arc::new(update_avatar_use_case),
        list_contacts_use_case: Arc::new(ListContactsUseCase::new(contact_repo.clone())),
        get_contact_use_case: Arc::new(GetContactUseCase::new(contact_repo.clone())),
        create_contact_use_case: Arc::new(CreateContactUseCase::new(contact_repo.clone())),
        update_contact_use_case: Arc::new(UpdateContactUseCase::new(contact_repo.clone())),
        delete_contact_use_case: Arc::new(DeleteContactUseCase::new(contact_repo.clone())),
        search_contacts_use_case: Arc::new(SearchContactsUseCase::new(contact_repo.clone())),
        upcoming_birthdays_use_case: Arc::new(UpcomingBirthdaysUseCase::new(contact_repo)),
    };

    let rate_limiter: Arc<dyn RateLimiter> = Arc::new(RedisRateLimiter::new(
        Arc::clone(&redis_arc),
        RATE_LIMIT_MAX_REQUESTS,
        RATE_LIMIT_WINDOW_SECS,
    ));

    // Clone for use in the HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&rate_limiter)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_user::signup_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::confirm_email::confirm_email_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::request_email::request_email_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user::fetch_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_avatar::update_avatar_handler);
    // Contacts. Fixed paths registered before the {contact_id} matcher.
    cfg.service(
        crate::contact::adapter::incoming::web::routes::search_contacts::search_contacts_handler,
    );
    cfg.service(
        crate::contact::adapter::incoming::web::routes::upcoming_birthdays::upcoming_birthdays_handler,
    );
    cfg.service(
        crate::contact::adapter::incoming::web::routes::list_contacts::list_contacts_handler,
    );
    cfg.service(
        crate::contact::adapter::incoming::web::routes::create_contact::create_contact_handler,
    );
    cfg.service(crate::contact::adapter::incoming::web::routes::get_contact::get_contact_handler);
    cfg.service(
        crate::contact::adapter::incoming::web::routes::update_contact::update_contact_handler,
    );
    cfg.service(
        crate::contact::adapter::incoming::web::routes::delete_contact::delete_contact_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
