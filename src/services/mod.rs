//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod rate_limiter;
pub mod review_queue;

pub use rate_limiter::RealRateLimiter;
pub use review_queue::RealReviewQueue;

#[cfg(test)]
mod tests;
