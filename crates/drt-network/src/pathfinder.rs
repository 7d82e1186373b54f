//! Pluggable least-cost path routine.
//!
//! # Pluggability
//!
//! `NetworkOracle` calls routing via the [`LeastCostPathFinder`] trait, so
//! applications can swap in a contraction hierarchy, time-dependent A*, or a
//! congestion-aware model without touching the oracle's caching/augmentation
//! logic. The underlying multimodal network and its routing algorithm are
//! out of scope for this workspace — [`DijkstraPathFinder`]
//! exists only as the default/test implementation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::link::{LinkRegistry, NodeId};

/// Result of a point-to-point least-cost path query.
#[derive(Copy, Clone, Debug)]
pub struct PathResult {
    pub travel_time: f64,
    pub distance: f64,
    /// Generalized routing cost of the path. `TravelSegment::network_utility`
    /// is defined as `-cost`.
    pub cost: f64,
}

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` — `CachingNetworkOracle` is called
/// concurrently from Rayon workers during candidate generation.
pub trait LeastCostPathFinder: Send + Sync {
    /// Compute the least-cost path from `from` to `to`, departing at
    /// `departure_time`. Returns `None` if no path exists (disconnected
    /// graph); `from == to` is the caller's responsibility to special-case
    /// (the default implementation here returns a zero-cost path).
    fn shortest_path(
        &self,
        network: &LinkRegistry,
        from: NodeId,
        to: NodeId,
        departure_time: f64,
    ) -> Option<PathResult>;
}

/// Standard (time-independent) Dijkstra over the link graph.
///
/// Ignores `departure_time` — a time-dependent or congestion-aware
/// application should implement its own [`LeastCostPathFinder`].
pub struct DijkstraPathFinder;

impl LeastCostPathFinder for DijkstraPathFinder {
    fn shortest_path(
        &self,
        network: &LinkRegistry,
        from: NodeId,
        to: NodeId,
        _departure_time: f64,
    ) -> Option<PathResult> {
        dijkstra(network, from, to)
    }
}

fn dijkstra(network: &LinkRegistry, from: NodeId, to: NodeId) -> Option<PathResult> {
    if from == to {
        return Some(PathResult { travel_time: 0.0, distance: 0.0, cost: 0.0 });
    }

    let n = network.node_count();
    // dist[v] = best known (cost, distance, time) to reach v.
    let mut best_cost = vec![f64::INFINITY; n];
    let mut best_distance = vec![f64::INFINITY; n];
    let mut best_time = vec![f64::INFINITY; n];

    best_cost[from.index()] = 0.0;
    best_distance[from.index()] = 0.0;
    best_time[from.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<(OrderedCost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedCost(0.0), from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Some(PathResult {
                travel_time: best_time[node.index()],
                distance: best_distance[node.index()],
                cost: best_cost[node.index()],
            });
        }
        if cost.0 > best_cost[node.index()] {
            continue;
        }
        for &link_id in network.out_links(node) {
            let link = network.link(link_id);
            let new_cost = best_cost[node.index()] + link.travel_time_s;
            if new_cost < best_cost[link.to_node.index()] {
                best_cost[link.to_node.index()] = new_cost;
                best_time[link.to_node.index()] = best_time[node.index()] + link.travel_time_s;
                best_distance[link.to_node.index()] = best_distance[node.index()] + link.length_m;
                heap.push(Reverse((OrderedCost(new_cost), link.to_node)));
            }
        }
    }

    None
}

/// Thin `Ord` wrapper around `f64` for the Dijkstra priority queue.
#[derive(Copy, Clone, PartialEq)]
struct OrderedCost(f64);

impl Eq for OrderedCost {}

impl PartialOrd for OrderedCost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedCost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
