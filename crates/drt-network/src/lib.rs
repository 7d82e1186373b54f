//! `drt-network` — link registry, cached network oracle, and a default
//! Dijkstra router for the DRT shared-ride enumeration engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                         |
//! |---------------|---------------------------------------------------|
//! | [`link`]      | `LinkRegistry`, `LinkRegistryBuilder`, `NodeId`   |
//! | [`pathfinder`]| `LeastCostPathFinder`, `DijkstraPathFinder`       |
//! | [`cache`]     | `TravelSegmentCache`                              |
//! | [`oracle`]    | `NetworkOracle`, `CachingNetworkOracle`           |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                |

pub mod cache;
pub mod error;
pub mod link;
pub mod oracle;
pub mod pathfinder;

#[cfg(test)]
mod tests;

pub use cache::{CacheKey, TravelSegmentCache};
pub use error::{NetworkError, NetworkResult};
pub use link::{Link, LinkRegistry, LinkRegistryBuilder, NodeId};
pub use oracle::{CachingNetworkOracle, NetworkOracle};
pub use pathfinder::{DijkstraPathFinder, LeastCostPathFinder, PathResult};
