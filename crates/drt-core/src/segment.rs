//! The value type returned by a network query.

/// Travel metrics for one leg of a journey, produced by a `NetworkOracle`.
///
/// # Reachability
///
/// `is_reachable` is `true` iff both `travel_time` and `distance` are finite.
/// [`TravelSegment::UNREACHABLE`] is the canonical sentinel for "no path" —
/// callers check reachability rather than matching on a `Result`, since an
/// unreachable segment is an expected, non-exceptional outcome.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelSegment {
    /// Travel time in seconds.
    pub travel_time: f64,
    /// Distance in metres.
    pub distance: f64,
    /// Signed opposite of the generalized routing cost of the underlying path.
    pub network_utility: f64,
}

impl TravelSegment {
    /// Same link in, same link out, or any other zero-length leg.
    pub const ZERO: TravelSegment = TravelSegment {
        travel_time: 0.0,
        distance: 0.0,
        network_utility: 0.0,
    };

    /// Canonical "no path" sentinel. Never constructed piecemeal — any code
    /// that needs to signal unreachability should return this constant so
    /// `is_reachable` stays the single source of truth.
    pub const UNREACHABLE: TravelSegment = TravelSegment {
        travel_time: f64::INFINITY,
        distance: f64::INFINITY,
        network_utility: f64::NEG_INFINITY,
    };

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.travel_time.is_finite() && self.distance.is_finite()
    }

    /// Sum two consecutive legs. Unreachable propagates: `a + b` is
    /// unreachable whenever either leg is.
    pub fn chain(&self, other: &TravelSegment) -> TravelSegment {
        if !self.is_reachable() || !other.is_reachable() {
            return TravelSegment::UNREACHABLE;
        }
        TravelSegment {
            travel_time: self.travel_time + other.travel_time,
            distance: self.distance + other.distance,
            network_utility: self.network_utility + other.network_utility,
        }
    }
}
