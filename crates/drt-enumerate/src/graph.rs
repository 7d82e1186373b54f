//! `ShareabilityGraph` — the degree-2 adjacency the extender walks to find
//! admissible extensions.

use drt_core::{Ride, RideId, RideKind};

use drt_core::RequestId;

/// Undirected multigraph over request indices. Edges are degree-2 rides;
/// each edge carries the ride's index and FIFO/LIFO kind.
///
/// Built once, single-threaded, from the finalized degree-2 ride set, then
/// shared read-only by every parallel `RideExtender` worker.
pub struct ShareabilityGraph {
    adjacency: Vec<Vec<(RequestId, RideId, RideKind)>>,
}

impl ShareabilityGraph {
    /// `request_count` sizes the adjacency list; `pair_rides` must be every
    /// admitted degree-2 ride.
    pub fn build(request_count: usize, pair_rides: &[Ride]) -> Self {
        let mut adjacency = vec![Vec::new(); request_count];
        for ride in pair_rides {
            debug_assert_eq!(ride.degree, 2);
            let a = ride.requests[0];
            let b = ride.requests[1];
            adjacency[a.index()].push((b, ride.index, ride.kind));
            adjacency[b.index()].push((a, ride.index, ride.kind));
        }
        Self { adjacency }
    }

    pub fn neighbors(&self, request: RequestId) -> &[(RequestId, RideId, RideKind)] {
        &self.adjacency[request.index()]
    }

    /// Up to two entries (one per kind) connecting `a` and `b`.
    pub fn edges_between(&self, a: RequestId, b: RequestId) -> Vec<(RideId, RideKind)> {
        self.adjacency[a.index()]
            .iter()
            .filter(|&&(other, _, _)| other == b)
            .map(|&(_, ride_id, kind)| (ride_id, kind))
            .collect()
    }
}
