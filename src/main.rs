//! Service entry point
//!
//! Loads reference data before binding the listener; a missing or malformed
//! dataset aborts startup.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use coursebridge::core::ReferenceData;
use coursebridge::services::{RealRateLimiter, RealReviewQueue};
use coursebridge::{App, AppResult, AppState, ServerConfig};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = ServerConfig::parse();
    init_tracing(&config);

    info!("loading reference data from {}", config.data_dir.display());
    let reference = ReferenceData::load(&config.data_dir)?;
    info!(
        states = reference.states().len(),
        institutions = reference.institutions().len(),
        equivalencies = reference.equivalencies().len(),
        "✅ reference data loaded"
    );

    let state = AppState::new(reference, config.debug);
    let rate_limiter = RealRateLimiter::new();
    let review_queue = RealReviewQueue::new(config.queue_path());

    let app = App::new(state, rate_limiter, review_queue);
    let addr = config.bind_address()?;
    app.run(addr).await?;

    info!("server stopped gracefully");
    Ok(())
}

fn init_tracing(config: &ServerConfig) {
    let level = config.effective_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coursebridge={level},tower_http=warn")));
    fmt().with_env_filter(filter).init();
}
