//! Error types.

use crate::element::ElementId;
use thiserror::Error;

/// Diagram model errors.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for diagram operations.
pub type DiagramResult<T> = Result<T, DiagramError>;
