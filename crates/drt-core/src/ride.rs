//! `Ride` — a feasible servicing plan for 1..k pooled requests.

use crate::ids::{RequestId, RideId};

/// Classification of the pickup-vs-drop-off permutation relationship.
///
/// `FIFO` iff the two permutations are identical, `LIFO`
/// iff one is the exact reverse of the other, `SINGLE` iff degree 1,
/// `MIXED` otherwise (degree >= 3 only — a degree-2 ride is always FIFO or
/// LIFO, never MIXED).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RideKind {
    Single,
    Fifo,
    Lifo,
    Mixed,
}

impl RideKind {
    /// Classify a ride from its pickup and drop-off orders. Both slices must
    /// be permutations of the same participant set and have equal length.
    pub fn classify(pickup: &[RequestId], dropoff: &[RequestId]) -> RideKind {
        debug_assert_eq!(pickup.len(), dropoff.len());
        if pickup.len() == 1 {
            return RideKind::Single;
        }
        if pickup == dropoff {
            return RideKind::Fifo;
        }
        if pickup.iter().eq(dropoff.iter().rev()) {
            return RideKind::Lifo;
        }
        RideKind::Mixed
    }
}

/// A feasible shared ride: a fully determined pickup/drop-off sequence and
/// schedule for `degree` pooled `DrtRequest`s.
///
/// # Array conventions
///
/// - `requests` holds the participant set **sorted ascending by
///   `RequestId`** — this is the ride's identity for dedup purposes
///   and is *not* the pickup order. Use [`Ride::position_of`]
///   to map a `RequestId` to its slot in every per-passenger array.
/// - `origins_ordered` / `destinations_ordered` are the two permutations
///   (pickup order, drop-off order) that define `kind`.
/// - The full stop sequence a vehicle visits is `origins_ordered` followed by
///   `destinations_ordered` (origin of every participant, in pickup order,
///   then destination of every participant, in drop-off order) — every
///   builder in `drt-enumerate` relies on this to index `connection_*`.
/// - `delay[i]` is the scheduled pickup time of `requests[i]` **minus its own
///   `request_time`** (not minus `start_time`) — see DESIGN.md for why this
///   reading is the internally consistent one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ride {
    pub index: RideId,
    pub degree: usize,
    pub kind: RideKind,

    pub requests: Vec<RequestId>,
    pub origins_ordered: Vec<RequestId>,
    pub destinations_ordered: Vec<RequestId>,

    pub passenger_travel_time: Vec<f64>,
    pub passenger_distance: Vec<f64>,
    pub passenger_network_utility: Vec<f64>,
    pub delay: Vec<f64>,
    pub detour: Vec<f64>,

    pub connection_travel_time: Vec<f64>,
    pub connection_distance: Vec<f64>,
    pub connection_network_utility: Vec<f64>,

    pub start_time: f64,

    /// Populated by `BudgetValidator::validate_and_populate`.
    pub remaining_budget: Vec<f64>,
    pub max_cost: Vec<f64>,
}

impl Ride {
    /// Position of `request` within `requests` (and therefore within every
    /// per-passenger array). `None` if `request` is not a participant.
    pub fn position_of(&self, request: RequestId) -> Option<usize> {
        self.requests.iter().position(|&r| r == request)
    }

    /// Position of `request` in the pickup order.
    pub fn pickup_position(&self, request: RequestId) -> Option<usize> {
        self.origins_ordered.iter().position(|&r| r == request)
    }

    /// Position of `request` in the drop-off order.
    pub fn dropoff_position(&self, request: RequestId) -> Option<usize> {
        self.destinations_ordered.iter().position(|&r| r == request)
    }
}
