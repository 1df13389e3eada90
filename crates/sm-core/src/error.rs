//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls.

use thiserror::Error;

/// Errors produced while parsing core value types from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid point {0:?}: expected \"x,y\"")]
    InvalidPoint(String),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("unknown ability {0:?}")]
    UnknownAbility(String),
}

/// Shorthand result type for `sm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
