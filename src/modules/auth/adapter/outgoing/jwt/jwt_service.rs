use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, TokenScope,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn issue_token(
        &self,
        user_id: Uuid,
        scope: TokenScope,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            scope: scope.as_str().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn decode_scoped(&self, token: &str, expected: TokenScope) -> Result<Uuid, TokenError> {
        let claims = self.verify_token(token)?;

        match claims.scope() {
            Some(scope) if scope == expected => Ok(claims.sub),
            _ => {
                tracing::warn!(
                    "Token scope mismatch: expected '{}', got '{}'",
                    expected.as_str(),
                    claims.scope
                );
                Err(TokenError::InvalidScope(expected.as_str().to_string()))
            }
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_token(user_id, TokenScope::Access, self.config.access_token_expiry)
    }

    fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_token(
            user_id,
            TokenScope::Refresh,
            self.config.refresh_token_expiry,
        )
    }

    fn issue_email_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_token(user_id, TokenScope::Email, self.config.email_token_expiry)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }

    fn decode_refresh_token(&self, token: &str) -> Result<Uuid, TokenError> {
        self.decode_scoped(token, TokenScope::Refresh)
    }

    fn decode_email_token(&self, token: &str) -> Result<Uuid, TokenError> {
        self.decode_scoped(token, TokenScope::Email)
    }
}
