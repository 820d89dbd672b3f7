//! Non-API routes
//!
//! The landing page is served verbatim; template rendering is out of scope.

use axum::http::StatusCode;
use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

/// Empty 204 for favicon and touch-icon probes, keeping them out of the
/// access log as 404 noise.
pub async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
