//! Server assembly
//!
//! `App` wires the immutable application state together with the injected
//! rate limiter and review queue, builds the router, and runs the HTTP
//! server with graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, middleware,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::traits::{RateLimiter, ReviewQueue};
use crate::web::handlers::{api, pages};
use crate::web::middleware::access_log;

/// Application container with dependency injection.
pub struct App<R, Q>
where
    R: RateLimiter,
    Q: ReviewQueue,
{
    state: Arc<AppState>,
    rate_limiter: Arc<R>,
    review_queue: Arc<Q>,
}

// Manual impl: the services are shared behind Arcs, so cloning the container
// must not require R: Clone (mocks are not Clone).
impl<R: RateLimiter, Q: ReviewQueue> Clone for App<R, Q> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            rate_limiter: self.rate_limiter.clone(),
            review_queue: self.review_queue.clone(),
        }
    }
}

impl<R, Q> App<R, Q>
where
    R: RateLimiter + 'static,
    Q: ReviewQueue + 'static,
{
    pub fn new(state: AppState, rate_limiter: R, review_queue: Q) -> Self {
        Self {
            state: Arc::new(state),
            rate_limiter: Arc::new(rate_limiter),
            review_queue: Arc::new(review_queue),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn rate_limiter(&self) -> &R {
        &self.rate_limiter
    }

    pub fn review_queue(&self) -> &Q {
        &self.review_queue
    }

    /// Build the axum router with all routes and layers.
    pub fn build_router(&self) -> Router {
        let cors = if self.state.debug {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
        };

        Router::new()
            .route("/", get(pages::index))
            .route("/favicon.ico", get(pages::no_content))
            .route("/apple-touch-icon.png", get(pages::no_content))
            .route("/apple-touch-icon-precomposed.png", get(pages::no_content))
            .route("/healthz", get(api::healthz))
            .route("/api/states", get(api::states))
            .route("/api/institutions", get(api::institutions))
            .route("/api/evaluate", post(api::evaluate))
            .route("/api/request-review", post(api::request_review))
            .layer(cors)
            .layer(middleware::from_fn(access_log))
            .with_state(self.clone())
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn run(&self, addr: SocketAddr) -> AppResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::ServerStartup(format!("failed to bind {addr}: {e}")))?;

        info!("🌐 listening on http://{addr}");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::ServerStartup(e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
