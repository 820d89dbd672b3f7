//! Service trait definitions for dependency injection
//!
//! The side-effecting collaborators (rate limiting, review queue writes)
//! sit behind these traits so handlers can be exercised with mocks.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::types::{RateDecision, ReviewEntry};

/// Sliding-window request throttling per (scope, client identity).
#[mockall::automock]
pub trait RateLimiter: Send + Sync {
    /// Record one request attempt and decide whether it may proceed.
    fn allow(
        &self,
        scope: &str,
        identity: &str,
        max_requests: usize,
        window: Duration,
    ) -> RateDecision;
}

/// Durable queue of manual-review requests.
#[mockall::automock]
#[async_trait]
pub trait ReviewQueue: Send + Sync {
    /// Append one entry; previously queued entries are never lost.
    async fn submit(&self, entry: ReviewEntry) -> AppResult<()>;
}
