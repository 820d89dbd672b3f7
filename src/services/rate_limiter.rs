//! Sliding-window rate limiter
//!
//! One timestamp bucket per (scope, client identity). On every check the
//! bucket is pruned to the trailing window before counting, so the limit
//! tracks a true sliding window rather than fixed intervals.
//!
//! Buckets are never evicted once created; over a long process lifetime the
//! map grows with the number of distinct clients seen.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::traits::RateLimiter;
use crate::types::RateDecision;

type BucketKey = (String, String);

#[derive(Debug, Default)]
pub struct RealRateLimiter {
    buckets: Mutex<HashMap<BucketKey, VecDeque<Instant>>>,
}

impl RealRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and record a request at an explicit point in time.
    ///
    /// Separated from [`RateLimiter::allow`] so tests can drive the window
    /// with synthetic instants instead of sleeping.
    pub(crate) fn allow_at(
        &self,
        scope: &str,
        identity: &str,
        max_requests: usize,
        window: Duration,
        now: Instant,
    ) -> RateDecision {
        let key = (scope.to_string(), identity.to_string());
        let mut buckets = self.buckets.lock().unwrap();
        let bucket = buckets.entry(key).or_default();

        while let Some(oldest) = bucket.front() {
            if now.duration_since(*oldest) > window {
                bucket.pop_front();
            } else {
                break;
            }
        }

        if bucket.len() >= max_requests {
            // Oldest request still in the window decides when a slot frees up.
            let oldest = bucket.front().copied().unwrap_or(now);
            let elapsed = now.duration_since(oldest).as_secs();
            let retry_after_secs = window.as_secs().saturating_sub(elapsed).max(1);
            return RateDecision::Limited { retry_after_secs };
        }

        bucket.push_back(now);
        RateDecision::Allowed
    }

    #[cfg(test)]
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.lock().unwrap().len()
    }
}

impl RateLimiter for RealRateLimiter {
    fn allow(
        &self,
        scope: &str,
        identity: &str,
        max_requests: usize,
        window: Duration,
    ) -> RateDecision {
        self.allow_at(scope, identity, max_requests, window, Instant::now())
    }
}
