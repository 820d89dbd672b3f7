//! Request correlation and access logging
//!
//! Wraps every route: assigns or propagates a correlation id, times the
//! handler, and emits one structured access-log event per request. The id
//! is echoed back to the caller as `X-Request-ID`. Nothing in here may fail
//! the request or alter the response body.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use tracing::info;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

const USER_AGENT_MAX_LEN: usize = 200;

/// Client identity for limiter keys, log records and queue entries.
///
/// First value of `X-Forwarded-For` when present, else the peer address.
/// Spoofable by design; a deliberate simplification, not a security boundary.
pub fn client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers.get(FORWARDED_FOR_HEADER).and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    peer.map(|addr| addr.ip().to_string()).unwrap_or_else(|| "-".to_string())
}

pub async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();

    let rid = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0);
    let ip = client_identity(request.headers(), peer);
    let ua: String = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .chars()
        .take(USER_AGENT_MAX_LEN)
        .collect();

    let mut response = next.run(request).await;

    info!(
        ts = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        rid = %rid,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        ip = %ip,
        ua = %ua,
        "request"
    );

    // An unrepresentable inbound id is dropped rather than failing the response.
    if let Ok(value) = HeaderValue::from_str(&rid) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
