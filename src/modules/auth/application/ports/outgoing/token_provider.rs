use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a token is allowed to authorize. The discriminant travels in the
/// `scope` claim and is checked on every decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    Access,
    Refresh,
    Email,
}

impl TokenScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScope::Access => "access_token",
            TokenScope::Refresh => "refresh_token",
            TokenScope::Email => "email_token",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "access_token" => Some(TokenScope::Access),
            "refresh_token" => Some(TokenScope::Refresh),
            "email_token" => Some(TokenScope::Email),
            _ => None,
        }
    }
}

/// JWT claims carried by every token this service issues.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,     // User ID
    pub iat: i64,      // Issued at timestamp
    pub exp: i64,      // Expiration timestamp
    pub scope: String, // "access_token", "refresh_token" or "email_token"
}

impl TokenClaims {
    pub fn scope(&self) -> Option<TokenScope> {
        TokenScope::parse(&self.scope)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token scope, expected: {0}")]
    InvalidScope(String),
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

pub trait TokenProvider: Send + Sync {
    fn issue_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn issue_email_token(&self, user_id: Uuid) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Decode a refresh token and return its subject. Fails on bad
    /// signature, expiry, or a scope other than `refresh_token`.
    fn decode_refresh_token(&self, token: &str) -> Result<Uuid, TokenError>;

    /// Decode an email-confirmation token and return its subject.
    fn decode_email_token(&self, token: &str) -> Result<Uuid, TokenError>;
}
