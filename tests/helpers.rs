//! Test helper utilities for integration tests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use coursebridge::core::ReferenceData;
use coursebridge::services::{RealRateLimiter, RealReviewQueue};
use coursebridge::{App, AppState};

/// A fully wired app over real services, backed by a temp data directory.
pub struct TestApp {
    pub router: Router,
    pub data_dir: TempDir,
}

impl TestApp {
    pub fn with_datasets(datasets: &[(&str, Value)]) -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        for (name, value) in datasets {
            std::fs::write(
                data_dir.path().join(name),
                serde_json::to_string_pretty(value).unwrap(),
            )
            .unwrap();
        }

        let reference = ReferenceData::load(data_dir.path()).unwrap();
        let state = AppState::new(reference, false);
        let rate_limiter = RealRateLimiter::new();
        let review_queue = RealReviewQueue::new(data_dir.path().join("pending_reviews.json"));

        let router = App::new(state, rate_limiter, review_queue).build_router();
        Self { router, data_dir }
    }

    /// Drive one request through the router.
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn queue_entries(&self) -> Vec<Value> {
        let raw = tokio::fs::read_to_string(self.data_dir.path().join("pending_reviews.json"))
            .await
            .expect("queue file should exist");
        serde_json::from_str(&raw).expect("queue file should be a JSON array")
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Same as [`post_json`] but with a spoofed client identity.
pub fn post_json_from(uri: &str, payload: &Value, forwarded_for: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", forwarded_for)
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
