use thiserror::Error;

use crate::core::EngineError;
use crate::models::RequestError;

/// Errors surfaced by the batch ranking entry point
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl AppError {
    /// Stable machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "invalid_config",
            AppError::Io(_) => "io_error",
            AppError::Json(_) => "invalid_json",
            AppError::Request(_) => "validation_failed",
            AppError::Engine(_) => "unknown_engine",
        }
    }
}
