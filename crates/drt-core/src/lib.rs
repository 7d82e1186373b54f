//! `drt-core` — foundational types for the DRT shared-ride enumeration engine.
//!
//! This crate has no dependencies on the rest of the workspace and minimal
//! external ones (`thiserror`, plus optional `serde`). Every other `drt-*`
//! crate depends on it.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `RequestId`, `RideId`, `LinkId`, `PaxId`, `GroupId` |
//! | [`request`]| `DrtRequest`                                      |
//! | [`segment`]| `TravelSegment`                                   |
//! | [`ride`]   | `Ride`, `RideKind`                                |
//! | [`config`] | `EnumerationConfig`                               |
//! | [`error`]  | `CoreError`, `CoreResult<T>`                      |

pub mod config;
pub mod error;
pub mod ids;
pub mod request;
pub mod ride;
pub mod segment;

#[cfg(test)]
mod tests;

pub use config::EnumerationConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{GroupId, LinkId, PaxId, RequestId, RideId};
pub use request::DrtRequest;
pub use ride::{Ride, RideKind};
pub use segment::TravelSegment;
