//! HTTP layer: middleware and route handlers

pub mod handlers;
pub mod middleware;
