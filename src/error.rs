//! Service-specific error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to load reference data from {path}: {message}")]
    DataLoad { path: PathBuf, message: String },

    #[error("server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
