//! Server configuration
//!
//! Every setting has a flag, an environment fallback and a documented
//! default, so the binary runs with no arguments against `./data`.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{AppError, AppResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "coursebridge")]
#[command(about = "Course articulation lookup service")]
pub struct ServerConfig {
    /// Directory holding the reference datasets and the review queue file
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Bind host
    #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Bind port
    #[arg(long, env = "APP_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Debug mode: permissive CORS and a more verbose default log level
    #[arg(long, env = "APP_DEBUG")]
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::ServerStartup(format!("invalid bind address: {e}")))
    }

    /// Path of the durable review queue, a JSON array file in the data dir.
    pub fn queue_path(&self) -> PathBuf {
        self.data_dir.join("pending_reviews.json")
    }

    /// Effective base log level; `--debug` lifts the floor to `debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug { "debug" } else { &self.log_level }
    }
}
