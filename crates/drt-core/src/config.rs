//! Top-level enumeration configuration.

use crate::error::{CoreError, CoreResult};

/// Parameters shared by every enumeration component.
///
/// Typically constructed once by the embedding application and passed by
/// reference to `EnumerationDriver::new`, which validates it — an invalid
/// configuration is fatal, raised at driver construction.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationConfig {
    /// Temporal window (seconds) for pair candidacy.
    pub search_horizon: f64,
    /// Upper bound on ride degree. Must be >= 1.
    pub max_pooling_degree: usize,
    /// Cache time-bin width (seconds). Must be > 0.
    pub network_time_bin_size: f64,
    /// Ceiling on `passenger_travel_time / direct_travel_time`. Must be >= 1.
    pub max_detour_factor: f64,
    /// Optional hard cap on detour time (seconds), intersected with the
    /// factor-derived cap.
    pub max_absolute_detour: Option<f64>,
    /// Numerical tolerance for delay/budget feasibility comparisons.
    pub epsilon: f64,
}

impl EnumerationConfig {
    /// Default epsilon used throughout delay/budget feasibility comparisons.
    pub const DEFAULT_EPSILON: f64 = 1e-9;

    pub fn validate(&self) -> CoreResult<()> {
        if self.max_pooling_degree < 1 {
            return Err(CoreError::InvalidConfig("max_pooling_degree must be >= 1"));
        }
        if !(self.network_time_bin_size > 0.0) {
            return Err(CoreError::InvalidConfig(
                "network_time_bin_size must be > 0",
            ));
        }
        if !(self.max_detour_factor >= 1.0) {
            return Err(CoreError::InvalidConfig("max_detour_factor must be >= 1"));
        }
        if !(self.search_horizon >= 0.0) {
            return Err(CoreError::InvalidConfig("search_horizon must be >= 0"));
        }
        if !(self.epsilon > 0.0) {
            return Err(CoreError::InvalidConfig("epsilon must be > 0"));
        }
        if let Some(abs) = self.max_absolute_detour {
            if !(abs >= 0.0) {
                return Err(CoreError::InvalidConfig(
                    "max_absolute_detour must be >= 0 when set",
                ));
            }
        }
        Ok(())
    }
}
