use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, TokenScope};
use crate::shared::api::ApiResponse;
use crate::shared::limiter::{RateDecision, RateLimiter};

/// A caller holding a valid access token. Signature, expiry and scope are
/// checked here; whether the user row still exists is the use case's job.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ActixError> {
    let jwt_service = match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>() {
        Some(service) => service,
        None => {
            return Err(create_api_error(ApiResponse::internal_error()));
        }
    };

    let token = match extract_token_from_header(req) {
        Some(t) => t,
        None => {
            return Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            )));
        }
    };

    match jwt_service.verify_token(&token) {
        Ok(claims) => {
            if claims.scope() != Some(TokenScope::Access) {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_SCOPE",
                    "Invalid token scope",
                )));
            }

            Ok(AuthenticatedUser {
                user_id: claims.sub,
            })
        }
        Err(_) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))),
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// An authenticated caller that also passed the per-user rate limit.
/// Contact routes extract this instead of [`AuthenticatedUser`].
#[derive(Debug, Clone)]
pub struct ThrottledUser {
    pub user_id: Uuid,
}

impl FromRequest for ThrottledUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticated = authenticate(req);
        let limiter = req
            .app_data::<actix_web::web::Data<Arc<dyn RateLimiter>>>()
            .cloned();

        Box::pin(async move {
            let user = authenticated?;

            let limiter = match limiter {
                Some(limiter) => limiter,
                None => {
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            match limiter.hit(&user.user_id.to_string()).await {
                Ok(RateDecision::Allowed { .. }) => Ok(ThrottledUser {
                    user_id: user.user_id,
                }),
                Ok(RateDecision::Exceeded { retry_after_secs }) => {
                    Err(create_api_error(ApiResponse::too_many_requests(
                        "RATE_LIMIT_EXCEEDED",
                        &format!(
                            "Too many requests, retry in {} seconds",
                            retry_after_secs
                        ),
                    )))
                }
                // Fail open: a limiter outage must not take the API down.
                Err(e) => {
                    tracing::warn!("Rate limiter unavailable, allowing request: {}", e);
                    Ok(ThrottledUser {
                        user_id: user.user_id,
                    })
                }
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
