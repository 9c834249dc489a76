pub mod rate_limiter;
pub mod redis_rate_limiter;

pub use rate_limiter::{RateDecision, RateLimitError, RateLimiter};
pub use redis_rate_limiter::RedisRateLimiter;
