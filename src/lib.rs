//! Course articulation lookup service.
//!
//! Given a transferring institution and a course code, reports whether an
//! equivalent course exists at OSU. Queries with no match can be queued for
//! manual review. Every request passes through a structured access log and,
//! for the mutating endpoints, a sliding-window rate limiter.

pub mod config;
pub mod core;
pub mod error;
pub mod server;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use server::App;
pub use state::AppState;

// Re-export trait definitions and service implementations
pub use services::{RealRateLimiter, RealReviewQueue};
pub use traits::{RateLimiter, ReviewQueue};
