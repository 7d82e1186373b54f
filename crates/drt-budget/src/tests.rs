use drt_core::{DrtRequest, GroupId, LinkId, PaxId, RequestId, Ride, RideId, RideKind};

use crate::constraints::{ConstraintsCalculator, ScoringConfig};
use crate::validator::BudgetValidator;

fn sample_request(index: u32, budget: f64) -> DrtRequest {
    DrtRequest::new(
        RequestId(index),
        PaxId(index as u64),
        GroupId(0),
        LinkId(0),
        LinkId(1),
        0.0,
        60.0,
        1000.0,
        60.0,
        60.0,
        30.0,
        30.0,
        120.0,
        budget,
    )
    .unwrap()
}

fn candidate_ride(request_id: RequestId, travel_time: f64, distance: f64) -> Ride {
    Ride {
        index: RideId::INVALID,
        degree: 1,
        kind: RideKind::Single,
        requests: vec![request_id],
        origins_ordered: vec![request_id],
        destinations_ordered: vec![request_id],
        passenger_travel_time: vec![travel_time],
        passenger_distance: vec![distance],
        passenger_network_utility: vec![0.0],
        delay: vec![0.0],
        detour: vec![travel_time - 60.0],
        connection_travel_time: vec![travel_time],
        connection_distance: vec![distance],
        connection_network_utility: vec![0.0],
        start_time: 0.0,
        remaining_budget: Vec::new(),
        max_cost: Vec::new(),
    }
}

#[test]
fn constraints_caps_at_factor_derived_ceiling() {
    let scoring = ScoringConfig { u_time: 1.0, u_dist: 0.0, avg_speed: 10.0 };
    // Huge budget, but maxDetourFactor = 1.5 caps detour at (1.5-1)*60 = 30.
    let calc = ConstraintsCalculator::new(scoring, 1.5, None);
    let cap = calc.max_detour_time(10_000.0, 60.0, 1000.0);
    assert!((cap - 30.0).abs() < 1e-9);
}

#[test]
fn constraints_caps_at_budget_derived_ceiling() {
    let scoring = ScoringConfig { u_time: 1.0, u_dist: 0.0, avg_speed: 10.0 };
    // Budget of 5 utility units with u_time=1 => only 5 seconds of detour.
    let calc = ConstraintsCalculator::new(scoring, 10.0, None);
    let cap = calc.max_detour_time(5.0, 60.0, 1000.0);
    assert!((cap - 5.0).abs() < 1e-9);
}

#[test]
fn constraints_intersects_absolute_detour_cap() {
    let scoring = ScoringConfig { u_time: 1.0, u_dist: 0.0, avg_speed: 10.0 };
    let calc = ConstraintsCalculator::new(scoring, 10.0, Some(2.0));
    let cap = calc.max_detour_time(5.0, 60.0, 1000.0);
    assert!((cap - 2.0).abs() < 1e-9);
}

#[test]
fn constraints_handles_zero_scoring_weights_without_nan() {
    let scoring = ScoringConfig { u_time: 0.0, u_dist: 0.0, avg_speed: 10.0 };
    let calc = ConstraintsCalculator::new(scoring, 1.5, None);
    let cap = calc.max_detour_time(5.0, 60.0, 1000.0);
    assert!(cap.is_finite());
    assert!((cap - 30.0).abs() < 1e-9); // falls back to the factor cap
}

#[test]
fn validator_admits_ride_within_budget() {
    let scoring = ScoringConfig { u_time: 0.1, u_dist: 0.0, avg_speed: 10.0 };
    let validator = BudgetValidator::new(scoring, 1e-9);
    let request = sample_request(0, 2.0);
    // detour = 70 - 60 = 10s; cost = 0.1 * 10 = 1.0 <= budget 2.0.
    let ride = candidate_ride(RequestId(0), 70.0, 1000.0);

    let result = validator.validate_and_populate(ride, &[request]).unwrap();
    assert_eq!(result.max_cost, vec![2.0]);
    assert!((result.remaining_budget[0] - 1.0).abs() < 1e-9);
}

#[test]
fn validator_rejects_ride_over_budget() {
    let scoring = ScoringConfig { u_time: 0.1, u_dist: 0.0, avg_speed: 10.0 };
    let validator = BudgetValidator::new(scoring, 1e-9);
    let request = sample_request(0, 0.5);
    // cost = 0.1 * 10 = 1.0 > budget 0.5.
    let ride = candidate_ride(RequestId(0), 70.0, 1000.0);

    assert!(validator.validate_and_populate(ride, &[request]).is_none());
}

#[test]
fn validator_allows_cost_exactly_at_epsilon_boundary() {
    let scoring = ScoringConfig { u_time: 1.0, u_dist: 0.0, avg_speed: 10.0 };
    let validator = BudgetValidator::new(scoring, 1e-9);
    let request = sample_request(0, 10.0);
    // cost exactly equals budget.
    let ride = candidate_ride(RequestId(0), 70.0, 1000.0);

    let result = validator.validate_and_populate(ride, &[request]).unwrap();
    assert!((result.remaining_budget[0]).abs() < 1e-9);
}
