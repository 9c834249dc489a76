use std::sync::Arc;

use actix_web::web;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, TokenScope,
};

/// Provider whose `verify_token` always succeeds with the configured
/// subject and scope. Issue methods are not used by route tests.
struct FixedClaimsProvider {
    user_id: Uuid,
    scope: TokenScope,
}

impl TokenProvider for FixedClaimsProvider {
    fn issue_access_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn issue_refresh_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn issue_email_token(&self, _user_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            iat: now,
            exp: now + 900,
            scope: self.scope.as_str().to_string(),
        })
    }

    fn decode_refresh_token(&self, _token: &str) -> Result<Uuid, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn decode_email_token(&self, _token: &str) -> Result<Uuid, TokenError> {
        unimplemented!("Not used in this test")
    }
}

/// Accepts any bearer token as an access token for `user_id`.
pub fn access_token_provider(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider>> {
    web::Data::new(Arc::new(FixedClaimsProvider {
        user_id,
        scope: TokenScope::Access,
    }) as Arc<dyn TokenProvider>)
}

/// Accepts any bearer token but reports refresh scope, so the access-only
/// extractor must reject it.
pub fn wrong_scope_token_provider(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider>> {
    web::Data::new(Arc::new(FixedClaimsProvider {
        user_id,
        scope: TokenScope::Refresh,
    }) as Arc<dyn TokenProvider>)
}
