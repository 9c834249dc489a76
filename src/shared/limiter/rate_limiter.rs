use async_trait::async_trait;

/// Outcome of a single rate-limit hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// Request is within the window; `remaining` hits left.
    Allowed { remaining: u32 },
    /// Window budget spent; retry after `retry_after_secs`.
    Exceeded { retry_after_secs: u64 },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit backend error: {0}")]
    Backend(String),
}

/// Fixed-window limiter keyed by caller identity.
///
/// Callers treat `Err` as "limiter unavailable" and fail open; the contact
/// API must stay usable when Redis is down.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn hit(&self, key: &str) -> Result<RateDecision, RateLimitError>;
}
