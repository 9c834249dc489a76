pub mod confirm_email;
pub mod fetch_profile;
pub mod login_user;
pub mod refresh_token;
pub mod request_email;
pub mod signup_user;
pub mod update_avatar;
