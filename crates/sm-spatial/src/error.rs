//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `sm-spatial`.  All of them arise while loading a guide
/// asset; lookups themselves never fail, they return `None`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("malformed guide entry {entry:?}: {reason}")]
    Parse { entry: String, reason: String },

    #[error("guide JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
