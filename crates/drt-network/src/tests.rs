use drt_core::{LinkId, TravelSegment};

use crate::cache::TravelSegmentCache;
use crate::link::{LinkRegistry, LinkRegistryBuilder, NodeId};
use crate::oracle::{CachingNetworkOracle, NetworkOracle};
use crate::pathfinder::{DijkstraPathFinder, LeastCostPathFinder};

/// 0 --link0--> 1 --link1--> 2 --link2--> 3, all 10 m/s.
fn sample_registry() -> LinkRegistry {
    let mut builder = LinkRegistryBuilder::new().with_nodes(4);
    builder.add_link(NodeId(0), NodeId(1), 100.0, 10.0, 10.0);
    builder.add_link(NodeId(1), NodeId(2), 200.0, 10.0, 20.0);
    builder.add_link(NodeId(2), NodeId(3), 100.0, 10.0, 10.0);
    builder.build()
}

#[test]
fn registry_exposes_csr_adjacency_in_insertion_order() {
    let registry = sample_registry();
    assert_eq!(registry.link_count(), 3);
    assert_eq!(registry.out_links(NodeId(0)), &[LinkId(0)]);
    assert_eq!(registry.out_links(NodeId(1)), &[LinkId(1)]);
    assert!(registry.out_links(NodeId(3)).is_empty());
    assert!(registry.out_links(NodeId::INVALID).is_empty());
}

#[test]
fn dijkstra_finds_shortest_path_across_two_hops() {
    let registry = sample_registry();
    let finder = DijkstraPathFinder;
    let result = finder.shortest_path(&registry, NodeId(1), NodeId(2), 0.0).unwrap();
    assert_eq!(result.travel_time, 20.0);
    assert_eq!(result.distance, 200.0);
    assert_eq!(result.cost, 20.0);
}

#[test]
fn dijkstra_returns_zero_cost_path_for_identical_endpoints() {
    let registry = sample_registry();
    let finder = DijkstraPathFinder;
    let result = finder.shortest_path(&registry, NodeId(2), NodeId(2), 0.0).unwrap();
    assert_eq!(result.travel_time, 0.0);
    assert_eq!(result.cost, 0.0);
}

#[test]
fn dijkstra_returns_none_for_disconnected_nodes() {
    let registry = sample_registry();
    let finder = DijkstraPathFinder;
    assert!(finder.shortest_path(&registry, NodeId(3), NodeId(0), 0.0).is_none());
}

#[test]
fn oracle_same_link_in_and_out_is_zero_cost() {
    let registry = sample_registry();
    let oracle = CachingNetworkOracle::new(registry, DijkstraPathFinder, 3600.0);
    let seg = oracle.get_segment(LinkId(0), LinkId(0), 0.0);
    assert_eq!(seg.travel_time, 0.0);
    assert_eq!(seg.distance, 0.0);
    assert_eq!(seg.network_utility, 0.0);
}

#[test]
fn oracle_unknown_link_is_unreachable() {
    let registry = sample_registry();
    let oracle = CachingNetworkOracle::new(registry, DijkstraPathFinder, 3600.0);
    let seg = oracle.get_segment(LinkId(0), LinkId(99), 0.0);
    assert!(!seg.is_reachable());
}

#[test]
fn oracle_augments_routed_path_with_terminal_link_free_flow() {
    let registry = sample_registry();
    let oracle = CachingNetworkOracle::new(registry, DijkstraPathFinder, 3600.0);
    // origin = link0 (0->1), destination = link2 (2->3).
    // Routed core: node 1 -> node 2 via link1, tt=20, dist=200.
    // Plus origin link0's own free-flow (10s, 100m) and dest link2's (10s, 100m).
    let seg = oracle.get_segment(LinkId(0), LinkId(2), 0.0);
    assert!(seg.is_reachable());
    assert_eq!(seg.travel_time, 40.0);
    assert_eq!(seg.distance, 400.0);
    assert_eq!(seg.network_utility, -20.0);
}

#[test]
fn oracle_caches_reachable_results() {
    let registry = sample_registry();
    let oracle = CachingNetworkOracle::new(registry, DijkstraPathFinder, 3600.0);
    assert_eq!(oracle.cache().len(), 0);
    oracle.get_segment(LinkId(0), LinkId(2), 0.0);
    assert_eq!(oracle.cache().len(), 1);
    // Second call hits the cache; result is unchanged.
    let seg = oracle.get_segment(LinkId(0), LinkId(2), 0.0);
    assert_eq!(seg.travel_time, 40.0);
    assert_eq!(oracle.cache().len(), 1);
}

#[test]
fn oracle_does_not_cache_unreachable_results() {
    let registry = sample_registry();
    let oracle = CachingNetworkOracle::new(registry, DijkstraPathFinder, 3600.0);
    oracle.get_segment(LinkId(2), LinkId(0), 0.0); // wrong direction, unreachable
    assert_eq!(oracle.cache().len(), 0);
}

#[test]
fn cache_csv_round_trip_preserves_reachable_entries() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("segments.csv");

    let cache = TravelSegmentCache::new();
    cache.insert(
        (LinkId(0), LinkId(2), 0),
        TravelSegment { travel_time: 40.0, distance: 400.0, network_utility: -20.0 },
    );
    cache.insert(
        (LinkId(1), LinkId(2), 1),
        TravelSegment { travel_time: 20.0, distance: 200.0, network_utility: -20.0 },
    );

    cache.dump_csv(&path).expect("dump");

    let loaded = TravelSegmentCache::new();
    loaded.load_csv(&path).expect("load");

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get((LinkId(0), LinkId(2), 0)), cache.get((LinkId(0), LinkId(2), 0)));
    assert_eq!(loaded.get((LinkId(1), LinkId(2), 1)), cache.get((LinkId(1), LinkId(2), 1)));
}

#[test]
fn cache_dump_omits_unreachable_entries() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("segments.csv");

    let cache = TravelSegmentCache::new();
    cache.insert(
        (LinkId(0), LinkId(2), 0),
        TravelSegment { travel_time: 40.0, distance: 400.0, network_utility: -20.0 },
    );
    cache.insert((LinkId(5), LinkId(6), 0), TravelSegment::UNREACHABLE);

    cache.dump_csv(&path).expect("dump");

    let loaded = TravelSegmentCache::new();
    loaded.load_csv(&path).expect("load");
    assert_eq!(loaded.len(), 1);
    assert!(loaded.get((LinkId(5), LinkId(6), 0)).is_none());
}

#[test]
fn cache_time_bin_floors_toward_negative_infinity() {
    assert_eq!(TravelSegmentCache::time_bin(3599.0, 3600.0), 0);
    assert_eq!(TravelSegmentCache::time_bin(3600.0, 3600.0), 1);
    assert_eq!(TravelSegmentCache::time_bin(-1.0, 3600.0), -1);
}
