//! Application errors.

use netdraw_core::ConfigError;
use netdraw_render::RendererError;
use thiserror::Error;

/// Errors surfaced by the command-line shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid session script: {0}")]
    Script(#[source] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("Failed to encode summary: {0}")]
    Summary(#[source] serde_json::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
