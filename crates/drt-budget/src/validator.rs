//! `BudgetValidator` — final admission gate for a candidate ride.

use drt_core::{DrtRequest, Ride};

use crate::constraints::ScoringConfig;

/// Validates a candidate ride's realized service against each participant's
/// utility budget, and stamps the per-passenger `remaining_budget`/`max_cost`
/// arrays on success.
///
/// Stateless and re-entrant; `validate_and_populate` is the only entry
/// point callers need.
pub struct BudgetValidator {
    scoring: ScoringConfig,
    epsilon: f64,
}

impl BudgetValidator {
    pub fn new(scoring: ScoringConfig, epsilon: f64) -> Self {
        Self { scoring, epsilon }
    }

    /// `candidate` must already have `passenger_travel_time` and
    /// `passenger_distance` populated, aligned to `requests` by position.
    /// Returns `None` if any participant's realized service exceeds their
    /// budget (within `epsilon`) — a non-exceptional rejection.
    pub fn validate_and_populate(&self, mut candidate: Ride, requests: &[DrtRequest]) -> Option<Ride> {
        let degree = candidate.requests.len();
        let mut remaining_budget = Vec::with_capacity(degree);
        let mut max_cost = Vec::with_capacity(degree);

        for pos in 0..degree {
            let request_id = candidate.requests[pos];
            let request = &requests[request_id.index()];

            let cost = self.realized_cost(
                candidate.passenger_travel_time[pos],
                candidate.passenger_distance[pos],
                request,
            );
            if cost > request.budget + self.epsilon {
                return None;
            }
            remaining_budget.push(request.budget - cost);
            max_cost.push(request.budget);
        }

        candidate.remaining_budget = remaining_budget;
        candidate.max_cost = max_cost;
        Some(candidate)
    }

    /// Utility cost of the realized service versus direct, re-derived from
    /// the ride's actual assigned travel time and distance.
    fn realized_cost(&self, passenger_travel_time: f64, passenger_distance: f64, request: &DrtRequest) -> f64 {
        let time_delta = (passenger_travel_time - request.direct_travel_time).max(0.0);
        let dist_delta = (passenger_distance - request.direct_distance).max(0.0);
        self.scoring.u_time.abs() * time_delta + self.scoring.u_dist.abs() * dist_delta
    }
}
