//! `NetworkOracle` — the capability the enumeration engine consumes to turn
//! a pair of links into a [`TravelSegment`], and [`CachingNetworkOracle`],
//! its default cached implementation.

use drt_core::{LinkId, TravelSegment};

use crate::cache::TravelSegmentCache;
use crate::link::LinkRegistry;
use crate::pathfinder::LeastCostPathFinder;

/// Abstract network query capability consumed by `drt-enumerate`.
/// Implementations must be safe to call concurrently from many Rayon
/// worker threads.
pub trait NetworkOracle: Send + Sync {
    /// Travel metrics for going from `origin` to `destination`, departing no
    /// earlier than `departure_time`. Never fails: an unroutable pair
    /// returns [`TravelSegment::UNREACHABLE`], never an error.
    fn get_segment(&self, origin: LinkId, destination: LinkId, departure_time: f64) -> TravelSegment;
}

/// Time-binned, cached [`NetworkOracle`] wrapping an injected
/// [`LeastCostPathFinder`].
///
/// # Contract
///
/// - `origin == destination` ⇒ [`TravelSegment::ZERO`], no routing call.
/// - Either link id unknown to the registry ⇒
///   [`TravelSegment::UNREACHABLE`], no routing call.
/// - Otherwise: route from `origin`'s end node to `destination`'s start
///   node, then augment the path with the free-flow traversal time/distance
///   of both terminal links (the path itself only covers the network
///   *between* the links' endpoints).
/// - Any routing failure (disconnected graph) ⇒
///   [`TravelSegment::UNREACHABLE`].
/// - `network_utility = -cost` of the routed (non-augmented) path.
/// - Results are memoized in a [`TravelSegmentCache`] keyed by
///   `(origin, destination, time_bin)`; unreachable results are not cached,
///   since they're cheap to recompute and caching them would let a
///   transient registry gap silently outlive a later network update.
pub struct CachingNetworkOracle<F: LeastCostPathFinder> {
    registry: LinkRegistry,
    pathfinder: F,
    cache: TravelSegmentCache,
    time_bin_size: f64,
}

impl<F: LeastCostPathFinder> CachingNetworkOracle<F> {
    pub fn new(registry: LinkRegistry, pathfinder: F, time_bin_size: f64) -> Self {
        Self { registry, pathfinder, cache: TravelSegmentCache::new(), time_bin_size }
    }

    pub fn registry(&self) -> &LinkRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &TravelSegmentCache {
        &self.cache
    }

    fn link_exists(&self, id: LinkId) -> bool {
        id.index() < self.registry.link_count()
    }

    fn route(&self, origin: LinkId, destination: LinkId, departure_time: f64) -> TravelSegment {
        let origin_link = self.registry.link(origin);
        let dest_link = self.registry.link(destination);

        let path = self.pathfinder.shortest_path(
            &self.registry,
            origin_link.to_node,
            dest_link.from_node,
            departure_time,
        );

        let Some(path) = path else {
            return TravelSegment::UNREACHABLE;
        };

        let core = TravelSegment {
            travel_time: path.travel_time,
            distance: path.distance,
            network_utility: -path.cost,
        };
        let origin_leg = TravelSegment {
            travel_time: origin_link.free_flow_travel_time(),
            distance: origin_link.length_m,
            network_utility: 0.0,
        };
        let dest_leg = TravelSegment {
            travel_time: dest_link.free_flow_travel_time(),
            distance: dest_link.length_m,
            network_utility: 0.0,
        };
        origin_leg.chain(&core).chain(&dest_leg)
    }
}

impl<F: LeastCostPathFinder> NetworkOracle for CachingNetworkOracle<F> {
    fn get_segment(&self, origin: LinkId, destination: LinkId, departure_time: f64) -> TravelSegment {
        if origin == destination {
            return TravelSegment::ZERO;
        }
        if !self.link_exists(origin) || !self.link_exists(destination) {
            return TravelSegment::UNREACHABLE;
        }

        let bin = TravelSegmentCache::time_bin(departure_time, self.time_bin_size);
        let key = (origin, destination, bin);

        if let Some(cached) = self.cache.get(key) {
            return cached;
        }
        let segment = self.route(origin, destination, departure_time);
        if segment.is_reachable() {
            self.cache.insert(key, segment);
        }
        segment
    }
}
