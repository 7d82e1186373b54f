//! Enumeration-subsystem error type.

use thiserror::Error;

/// Fatal errors raised at `EnumerationDriver` construction only.
///
/// Every other failure mode in the enumeration hot path
/// (unreachable segment, infeasible delay window, budget exceeded,
/// max-travel-time violation) is non-exceptional and handled by silently
/// dropping the candidate — it never reaches this type.
#[derive(Debug, Error)]
pub enum EnumerationError {
    #[error("invalid enumeration config: {0}")]
    InvalidConfig(#[from] drt_core::CoreError),
}

pub type EnumerationResult<T> = Result<T, EnumerationError>;
