//! Network-subsystem error type.

use thiserror::Error;

use drt_core::LinkId;

/// Errors produced by `drt-network`.
///
/// `NetworkOracle::get_segment` itself never raises these — a routing
/// failure or unknown link is downgraded to
/// `TravelSegment::UNREACHABLE`. These variants are for the link-registry
/// builder and the cache CSV round trip, where a malformed input genuinely
/// is an error.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("link {0} not found in registry")]
    LinkNotFound(LinkId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
