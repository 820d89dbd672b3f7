//! Service tests
//!
//! Unit tests for the real service implementations.

pub mod review_queue;
