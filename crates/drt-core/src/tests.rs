use crate::ids::{GroupId, LinkId, PaxId, RequestId};
use crate::request::DrtRequest;
use crate::ride::RideKind;
use crate::segment::TravelSegment;
use crate::EnumerationConfig;

fn sample_request(index: u32) -> DrtRequest {
    DrtRequest::new(
        RequestId(index),
        PaxId(index as u64),
        GroupId(0),
        LinkId(0),
        LinkId(1),
        100.0,
        60.0,
        1000.0,
        60.0,
        60.0,
        20.0,
        20.0,
        120.0,
        1.0,
    )
    .unwrap()
}

#[test]
fn earliest_and_latest_departure_are_derived() {
    let r = sample_request(0);
    assert_eq!(r.earliest_departure(), 40.0);
    assert_eq!(r.latest_departure(), 160.0);
}

#[test]
fn rejects_non_finite_fields() {
    let result = DrtRequest::new(
        RequestId(0),
        PaxId(0),
        GroupId(0),
        LinkId(0),
        LinkId(1),
        f64::NAN,
        60.0,
        1000.0,
        60.0,
        60.0,
        20.0,
        20.0,
        120.0,
        1.0,
    );
    assert!(result.is_err());
}

#[test]
fn rejects_max_travel_time_below_direct() {
    let result = DrtRequest::new(
        RequestId(0),
        PaxId(0),
        GroupId(0),
        LinkId(0),
        LinkId(1),
        100.0,
        60.0,
        1000.0,
        60.0,
        60.0,
        20.0,
        20.0,
        30.0,
        1.0,
    );
    assert!(result.is_err());
}

#[test]
fn rejects_negative_budget() {
    let result = DrtRequest::new(
        RequestId(0),
        PaxId(0),
        GroupId(0),
        LinkId(0),
        LinkId(1),
        100.0,
        60.0,
        1000.0,
        60.0,
        60.0,
        20.0,
        20.0,
        120.0,
        -1.0,
    );
    assert!(result.is_err());
}

#[test]
fn rejects_negative_delay_rel_component() {
    let result = DrtRequest::new(
        RequestId(0),
        PaxId(0),
        GroupId(0),
        LinkId(0),
        LinkId(1),
        100.0,
        60.0,
        1000.0,
        60.0,
        60.0,
        -20.0,
        20.0,
        120.0,
        1.0,
    );
    assert!(result.is_err());
}

#[test]
fn travel_segment_unreachable_sentinel() {
    assert!(!TravelSegment::UNREACHABLE.is_reachable());
    assert!(TravelSegment::ZERO.is_reachable());
}

#[test]
fn travel_segment_chain_propagates_unreachable() {
    let chained = TravelSegment::ZERO.chain(&TravelSegment::UNREACHABLE);
    assert!(!chained.is_reachable());
}

#[test]
fn travel_segment_chain_sums_reachable_legs() {
    let a = TravelSegment { travel_time: 10.0, distance: 100.0, network_utility: -1.0 };
    let b = TravelSegment { travel_time: 5.0, distance: 50.0, network_utility: -0.5 };
    let c = a.chain(&b);
    assert_eq!(c.travel_time, 15.0);
    assert_eq!(c.distance, 150.0);
    assert_eq!(c.network_utility, -1.5);
}

#[test]
fn ride_kind_classifies_single_fifo_lifo_mixed() {
    let (a, b, c) = (RequestId(0), RequestId(1), RequestId(2));
    assert_eq!(RideKind::classify(&[a], &[a]), RideKind::Single);
    assert_eq!(RideKind::classify(&[a, b], &[a, b]), RideKind::Fifo);
    assert_eq!(RideKind::classify(&[a, b], &[b, a]), RideKind::Lifo);
    assert_eq!(RideKind::classify(&[a, b, c], &[b, a, c]), RideKind::Mixed);
}

#[test]
fn config_rejects_non_positive_time_bin() {
    let cfg = EnumerationConfig {
        search_horizon: 600.0,
        max_pooling_degree: 4,
        network_time_bin_size: 0.0,
        max_detour_factor: 1.5,
        max_absolute_detour: None,
        epsilon: 1e-9,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_degree_below_one() {
    let cfg = EnumerationConfig {
        search_horizon: 600.0,
        max_pooling_degree: 0,
        network_time_bin_size: 900.0,
        max_detour_factor: 1.5,
        max_absolute_detour: None,
        epsilon: 1e-9,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_accepts_reasonable_values() {
    let cfg = EnumerationConfig {
        search_horizon: 600.0,
        max_pooling_degree: 4,
        network_time_bin_size: 900.0,
        max_detour_factor: 1.5,
        max_absolute_detour: Some(600.0),
        epsilon: 1e-9,
    };
    assert!(cfg.validate().is_ok());
}
