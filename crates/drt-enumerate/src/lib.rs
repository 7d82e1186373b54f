//! `drt-enumerate` — parallel, deterministic shared-ride enumeration for the
//! DRT demand-responsive transport engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|----------------------------------------------------|
//! | [`candidate`] | `CandidateContext` — shared stop-sequence builder   |
//! | [`single`]    | `SingleRideBuilder` — degree 1                      |
//! | [`pair`]      | `PairBuilder` — degree 2                            |
//! | [`graph`]     | `ShareabilityGraph`                                 |
//! | [`extender`]  | `RideExtender` — degree `k` → `k + 1`                |
//! | [`driver`]    | `EnumerationDriver`, `EnumerationDriverBuilder`     |
//! | [`observer`]  | `EnumerationObserver`, `NoopObserver`                |
//! | [`error`]     | `EnumerationError`, `EnumerationResult<T>`          |
//!
//! [`EnumerationDriverBuilder`][driver::EnumerationDriverBuilder] is the
//! entry point: it validates an [`drt_core::EnumerationConfig`] and wires up
//! every stage in [`driver::EnumerationDriver::run`].

pub mod candidate;
pub mod driver;
pub mod error;
pub mod extender;
pub mod graph;
pub mod observer;
pub mod pair;
pub mod single;


pub use candidate::CandidateContext;
pub use driver::{EnumerationDriver, EnumerationDriverBuilder};
pub use error::{EnumerationError, EnumerationResult};
pub use extender::RideExtender;
pub use graph::ShareabilityGraph;
pub use observer::{EnumerationObserver, NoopObserver};
pub use pair::PairBuilder;
pub use single::SingleRideBuilder;
