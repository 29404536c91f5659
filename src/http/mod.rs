//! HTTP client module
//!
//! Provides the HTTP client used for page requests.
//!
//! # Features
//!
//! - **Per-request timeout**: A slow page fails the run instead of hanging it
//! - **Optional retries**: Configurable retry logic with backoff, off by default
//! - **Rate limiting**: Optional token bucket rate limiter using governor
//! - **Backoff strategies**: Constant, linear, and exponential backoff

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
