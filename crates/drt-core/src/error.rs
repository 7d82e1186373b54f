//! Crate-wide error type for `drt-core`.
//!
//! Sub-crates define their own error enums for their own fallible operations
//! and convert into/wrap `CoreError` as needed, matching the layering used
//! throughout this workspace.

use thiserror::Error;

/// Errors raised while constructing or validating core value types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid request {index}: {reason}")]
    InvalidRequest { index: u32, reason: &'static str },

    #[error("invalid enumeration config: {0}")]
    InvalidConfig(&'static str),
}

/// Shorthand result type for `drt-core` and callers validating core types.
pub type CoreResult<T> = Result<T, CoreError>;
