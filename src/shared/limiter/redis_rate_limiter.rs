use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use std::sync::Arc;

use super::rate_limiter::{RateDecision, RateLimitError, RateLimiter};

/// Fixed-window counter in Redis: INCR the window key, set the expiry on the
/// first hit, reject once the count passes `max_requests`.
pub struct RedisRateLimiter {
    pool: Arc<Pool>,
    max_requests: u32,
    window_secs: u64,
}

impl RedisRateLimiter {
    pub fn new(pool: Arc<Pool>, max_requests: u32, window_secs: u64) -> Self {
        Self {
            pool,
            max_requests,
            window_secs,
        }
    }

    fn window_key(&self, key: &str) -> String {
        format!("rate_limit:{}", key)
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    async fn hit(&self, key: &str) -> Result<RateDecision, RateLimitError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| RateLimitError::Backend(format!("Redis pool error: {}", e)))?;

        let window_key = self.window_key(key);

        let count: u32 = conn
            .incr(&window_key, 1)
            .await
            .map_err(|e| RateLimitError::Backend(format!("INCR failed: {}", e)))?;

        if count == 1 {
            let _: () = conn
                .expire(&window_key, self.window_secs as i64)
                .await
                .map_err(|e| RateLimitError::Backend(format!("EXPIRE failed: {}", e)))?;
        }

        if count > self.max_requests {
            let ttl: i64 = conn
                .ttl(&window_key)
                .await
                .map_err(|e| RateLimitError::Backend(format!("TTL failed: {}", e)))?;

            return Ok(RateDecision::Exceeded {
                retry_after_secs: ttl.max(0) as u64,
            });
        }

        Ok(RateDecision::Allowed {
            remaining: self.max_requests - count,
        })
    }
}
