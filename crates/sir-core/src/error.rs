//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration failures surface unchanged.

use thiserror::Error;

/// The top-level error type for `sir-core`.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A configuration value is out of range or inconsistent with another.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        field:  &'static str,
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfig { field, reason: reason.into() }
    }
}

/// Shorthand result type for `sir-core`.
pub type CoreResult<T> = Result<T, CoreError>;
