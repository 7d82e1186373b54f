//! Shared candidate-ride construction from a full stop sequence.
//!
//! [`SingleRideBuilder`][crate::single::SingleRideBuilder],
//! [`PairBuilder`][crate::pair::PairBuilder], and
//! [`RideExtender`][crate::extender::RideExtender] all reduce to the same
//! underlying operation: given a pickup permutation and a drop-off
//! permutation of a participant set, build a candidate `Ride` by walking the
//! concatenated stop sequence, checking every constraint, and running the
//! delay optimizer once. This module is that shared operation.

use drt_core::{DrtRequest, EnumerationConfig, Ride, RideId, RideKind};
use drt_budget::ConstraintsCalculator;
use drt_network::NetworkOracle;
use drt_temporal::DelayOptimizer;

use drt_core::RequestId;

/// Total order used to sort degree-2+ candidates for deterministic indexing:
/// `FIFO < LIFO < MIXED`. `SINGLE` never reaches this
/// comparator since single rides are indexed outside the sort/validate
/// pipeline.
pub(crate) fn kind_rank(kind: RideKind) -> u8 {
    match kind {
        RideKind::Fifo => 0,
        RideKind::Lifo => 1,
        RideKind::Mixed => 2,
        RideKind::Single => 3,
    }
}

/// Dependencies every candidate-building call needs. Borrowed, never owned —
/// callers construct one per enumeration run and pass it by reference down
/// through every builder.
pub struct CandidateContext<'a> {
    pub requests: &'a [DrtRequest],
    pub oracle: &'a dyn NetworkOracle,
    pub config: &'a EnumerationConfig,
    pub constraints: &'a ConstraintsCalculator,
    pub delay_optimizer: &'a DelayOptimizer,
}

impl<'a> CandidateContext<'a> {
    fn request(&self, id: RequestId) -> &DrtRequest {
        &self.requests[id.index()]
    }

    fn link_at_stop(&self, stop: usize, origins: &[RequestId], destinations: &[RequestId]) -> drt_core::LinkId {
        let degree = origins.len();
        if stop < degree {
            self.request(origins[stop]).origin_link
        } else {
            self.request(destinations[stop - degree]).destination_link
        }
    }

    /// Build a candidate ride whose pickup order is `origins` and drop-off
    /// order is `destinations` — two permutations of the same participant
    /// set. Returns `None` at the first constraint violation or
    /// infeasibility; never panics on a
    /// semantically-rejectable input.
    pub fn build(&self, origins: Vec<RequestId>, destinations: Vec<RequestId>) -> Option<Ride> {
        let degree = origins.len();
        debug_assert_eq!(degree, destinations.len());
        debug_assert!(degree >= 1);

        let departure_time = self.request(origins[0]).request_time;
        let stop_count = 2 * degree;

        // Cumulative travel time / distance / utility over the full stop
        // sequence (pickups, then drop-offs), and the raw per-leg arrays
        // that become `Ride::connection_*`.
        let mut cumulative_tt = vec![0.0_f64; stop_count];
        let mut cumulative_dist = vec![0.0_f64; stop_count];
        let mut cumulative_util = vec![0.0_f64; stop_count];
        let mut leg_tt = Vec::with_capacity(stop_count - 1);
        let mut leg_dist = Vec::with_capacity(stop_count - 1);
        let mut leg_util = Vec::with_capacity(stop_count - 1);

        for s in 0..stop_count - 1 {
            let from = self.link_at_stop(s, &origins, &destinations);
            let to = self.link_at_stop(s + 1, &origins, &destinations);
            let leg = self.oracle.get_segment(from, to, departure_time);
            if !leg.is_reachable() {
                return None;
            }
            cumulative_tt[s + 1] = cumulative_tt[s] + leg.travel_time;
            cumulative_dist[s + 1] = cumulative_dist[s] + leg.distance;
            cumulative_util[s + 1] = cumulative_util[s] + leg.network_utility;
            leg_tt.push(leg.travel_time);
            leg_dist.push(leg.distance);
            leg_util.push(leg.network_utility);
        }

        let epsilon = self.config.epsilon;

        // Per-participant metrics, computed in pickup order, then re-keyed
        // by sorted RequestId for the final `Ride` arrays.
        struct Participant {
            id: RequestId,
            travel_time: f64,
            distance: f64,
            network_utility: f64,
            detour: f64,
            initial_delay: f64,
            eff_max_pos: f64,
            eff_max_neg: f64,
        }

        let mut participants = Vec::with_capacity(degree);
        for (pickup_pos, &id) in origins.iter().enumerate() {
            let dropoff_pos = degree + destinations.iter().position(|&r| r == id).unwrap();
            let request = self.request(id);

            let leg_sum_tt = cumulative_tt[dropoff_pos] - cumulative_tt[pickup_pos];
            let travel_time = leg_sum_tt.max(request.direct_travel_time);
            if travel_time > request.max_travel_time + epsilon {
                return None;
            }

            let distance = cumulative_dist[dropoff_pos] - cumulative_dist[pickup_pos];
            let network_utility = cumulative_util[dropoff_pos] - cumulative_util[pickup_pos];
            let detour = travel_time - request.direct_travel_time;

            let allowed_detour =
                self.constraints
                    .max_detour_time(request.budget, request.direct_travel_time, request.direct_distance);
            if detour > allowed_detour + epsilon {
                return None;
            }

            let eff_max_pos =
                (request.max_positive_delay - detour.min(request.positive_delay_rel_component)).max(0.0);
            let eff_max_neg =
                (request.max_negative_delay - detour.min(request.negative_delay_rel_component)).max(0.0);

            let initial_delay = (departure_time + cumulative_tt[pickup_pos]) - request.request_time;

            participants.push(Participant {
                id,
                travel_time,
                distance,
                network_utility,
                detour,
                initial_delay,
                eff_max_pos,
                eff_max_neg,
            });
        }

        let mut sorted_requests: Vec<RequestId> = origins.clone();
        sorted_requests.sort_by_key(|id| id.index());

        let find = |id: RequestId| participants.iter().find(|p| p.id == id).unwrap();

        let d: Vec<f64> = sorted_requests.iter().map(|&id| find(id).initial_delay).collect();
        let max_pos: Vec<f64> = sorted_requests.iter().map(|&id| find(id).eff_max_pos).collect();
        let max_neg: Vec<f64> = sorted_requests.iter().map(|&id| find(id).eff_max_neg).collect();

        let delay = self.delay_optimizer.optimize(&d, &max_pos, &max_neg)?;

        let passenger_travel_time = sorted_requests.iter().map(|&id| find(id).travel_time).collect();
        let passenger_distance = sorted_requests.iter().map(|&id| find(id).distance).collect();
        let passenger_network_utility =
            sorted_requests.iter().map(|&id| find(id).network_utility).collect();
        let detour = sorted_requests.iter().map(|&id| find(id).detour).collect();

        let kind = RideKind::classify(&origins, &destinations);

        Some(Ride {
            index: RideId::INVALID,
            degree,
            kind,
            requests: sorted_requests,
            origins_ordered: origins,
            destinations_ordered: destinations,
            passenger_travel_time,
            passenger_distance,
            passenger_network_utility,
            delay,
            detour,
            connection_travel_time: leg_tt,
            connection_distance: leg_dist,
            connection_network_utility: leg_util,
            start_time: departure_time,
            remaining_budget: Vec::new(),
            max_cost: Vec::new(),
        })
    }
}
