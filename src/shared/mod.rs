pub mod api;
pub mod limiter;
