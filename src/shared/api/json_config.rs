// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;

/// Funnels body parse failures through the standard error envelope so
/// malformed JSON yields the same shape as domain validation errors.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            JsonPayloadError::ContentType => "Expected application/json".to_string(),
            JsonPayloadError::Deserialize(e) => e.to_string(),
            other => other.to_string(),
        };
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
