//! JSON API handlers
//!
//! Validation accumulates every failing field into a `{field: message}` map
//! before responding; a lookup miss is a normal `no_match` outcome, not an
//! error. The two POST endpoints check the rate limiter before any other
//! work.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::error;

use crate::server::App;
use crate::traits::{RateLimiter, ReviewQueue};
use crate::types::{EvaluateRequest, RateDecision, ReviewEntry, ReviewRequest};
use crate::web::middleware::client_identity;

pub const EVALUATE_SCOPE: &str = "evaluate";
pub const REVIEW_SCOPE: &str = "request_review";

const EVALUATE_MAX_REQUESTS: usize = 30;
const REVIEW_MAX_REQUESTS: usize = 10;
const RATE_WINDOW: Duration = Duration::from_secs(60);

const INSTITUTION_LIST_CAP: usize = 50;

fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Liveness probe; never consults reference data.
pub async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "time": iso_now(),
    }))
}

pub async fn states<R, Q>(State(app): State<App<R, Q>>) -> Json<Value>
where
    R: RateLimiter + 'static,
    Q: ReviewQueue + 'static,
{
    Json(json!(app.state().reference.states()))
}

#[derive(Debug, Default, Deserialize)]
pub struct InstitutionQuery {
    pub q: Option<String>,
    pub state: Option<String>,
}

/// Institution name autocomplete: exact state filter, then case-insensitive
/// substring on the name, capped at 50 results.
pub async fn institutions<R, Q>(
    State(app): State<App<R, Q>>,
    Query(params): Query<InstitutionQuery>,
) -> Json<Vec<String>>
where
    R: RateLimiter + 'static,
    Q: ReviewQueue + 'static,
{
    let q = params.q.unwrap_or_default().to_lowercase();
    let state_filter = params.state.unwrap_or_default().to_uppercase();

    let names = app
        .state()
        .reference
        .institutions()
        .iter()
        .filter(|i| state_filter.is_empty() || i.state.to_uppercase() == state_filter)
        .filter(|i| q.is_empty() || i.name.to_lowercase().contains(&q))
        .map(|i| i.name.clone())
        .take(INSTITUTION_LIST_CAP)
        .collect();

    Json(names)
}

fn rate_limited(scope: &str, retry_after_secs: u64) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({
            "status": "rate_limited",
            "message": "Too many requests. Please try again later.",
            "scope": scope,
        })),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
    response
}

fn validation_error(errors: Map<String, Value>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "status": "error", "errors": errors })),
    )
        .into_response()
}

pub async fn evaluate<R, Q>(
    State(app): State<App<R, Q>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Json(payload): Json<EvaluateRequest>,
) -> Response
where
    R: RateLimiter + 'static,
    Q: ReviewQueue + 'static,
{
    let ip = client_identity(&headers, peer.map(|info| info.0));
    if let RateDecision::Limited { retry_after_secs } =
        app.rate_limiter()
            .allow(EVALUATE_SCOPE, &ip, EVALUATE_MAX_REQUESTS, RATE_WINDOW)
    {
        return rate_limited(EVALUATE_SCOPE, retry_after_secs);
    }

    let institution = payload.institution.as_deref().unwrap_or("").trim();
    let course_code = payload.course_code.as_deref().unwrap_or("").trim();
    let degree = payload.degree.as_deref().unwrap_or("");
    let state_code = payload.state.as_deref().unwrap_or("").trim().to_uppercase();

    let mut errors = Map::new();
    if institution.is_empty() {
        errors.insert("institution".into(), json!("Institution is required."));
    }
    if course_code.is_empty() {
        errors.insert("course_code".into(), json!("Course code is required."));
    }
    if degree.is_empty() {
        errors.insert("degree".into(), json!("Degree is required."));
    }
    if !state_code.is_empty() && !app.state().reference.is_valid_state(&state_code) {
        errors.insert(
            "state".into(),
            json!("State must be a valid two-letter abbreviation."),
        );
    }
    if !errors.is_empty() {
        return validation_error(errors);
    }

    let Some(matched) = app.state().index.get(institution, course_code) else {
        return Json(json!({
            "status": "no_match",
            "message": "Course not found in OSU Chemistry articulation database.",
        }))
        .into_response();
    };

    // Unresolvable equivalent-course keys are dropped, not errors.
    let course_meta: Vec<_> = matched
        .osu_equivalent
        .iter()
        .filter_map(|key| app.state().reference.course_meta(key))
        .collect();

    Json(json!({
        "status": "ok",
        "result": matched,
        "degree": app.state().reference.degree_name(degree),
        "course_meta": course_meta,
    }))
    .into_response()
}

pub async fn request_review<R, Q>(
    State(app): State<App<R, Q>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Json(payload): Json<ReviewRequest>,
) -> Response
where
    R: RateLimiter + 'static,
    Q: ReviewQueue + 'static,
{
    let ip = client_identity(&headers, peer.map(|info| info.0));
    if let RateDecision::Limited { retry_after_secs } =
        app.rate_limiter()
            .allow(REVIEW_SCOPE, &ip, REVIEW_MAX_REQUESTS, RATE_WINDOW)
    {
        return rate_limited(REVIEW_SCOPE, retry_after_secs);
    }

    let institution = payload.institution.as_deref().unwrap_or("").trim();
    let state_code = payload.state.as_deref().unwrap_or("").trim().to_uppercase();
    let course_code = payload.course_code.as_deref().unwrap_or("").trim();
    let degree = payload.degree.as_deref().unwrap_or("");

    let mut errors = Map::new();
    if institution.is_empty() {
        errors.insert("institution".into(), json!("Institution is required."));
    }
    if state_code.is_empty() {
        errors.insert("state".into(), json!("State is required."));
    } else if !app.state().reference.is_valid_state(&state_code) {
        errors.insert(
            "state".into(),
            json!("State must be a valid two-letter abbreviation."),
        );
    }
    if course_code.is_empty() {
        errors.insert("course_code".into(), json!("Course code is required."));
    }
    if degree.is_empty() {
        errors.insert("degree".into(), json!("Degree is required."));
    }
    if !errors.is_empty() {
        return validation_error(errors);
    }

    let entry = ReviewEntry {
        institution: institution.to_string(),
        state: state_code,
        course_code: course_code.to_string(),
        degree: degree.to_string(),
        submitted_at: iso_now(),
        ip,
    };

    match app.review_queue().submit(entry).await {
        Ok(()) => Json(json!({ "status": "queued" })).into_response(),
        Err(e) => {
            error!(error = %e, "failed to append review entry");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "Unable to queue the request. Please try again later.",
                })),
            )
                .into_response()
        }
    }
}
