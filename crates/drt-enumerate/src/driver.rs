//! `EnumerationDriver` — top-level orchestration across all ride degrees.

use drt_budget::{BudgetValidator, ConstraintsCalculator, ScoringConfig};
use drt_core::{DrtRequest, EnumerationConfig, Ride};
use drt_network::NetworkOracle;
use drt_temporal::{DelayOptimizer, TimeFilter};

use crate::candidate::CandidateContext;
use crate::error::{EnumerationError, EnumerationResult};
use crate::extender::RideExtender;
use crate::graph::ShareabilityGraph;
use crate::observer::EnumerationObserver;
use crate::pair::PairBuilder;
use crate::single::SingleRideBuilder;

/// Drives the full enumeration: degree 1, then degree 2, then repeated
/// extension up to `config.max_pooling_degree`.
///
/// Emission order and index assignment: single rides
/// occupy `[0, n)`; every higher degree's admitted rides are appended next,
/// in the deterministic content order fixed by its builder's sort step.
/// Create via [`EnumerationDriverBuilder`].
pub struct EnumerationDriver<'a> {
    requests: &'a [DrtRequest],
    oracle: &'a dyn NetworkOracle,
    config: EnumerationConfig,
    constraints: ConstraintsCalculator,
}

impl<'a> EnumerationDriver<'a> {
    /// Run the full enumeration and return every admitted ride, ordered by
    /// increasing degree and, within a degree, by increasing `RideId`.
    pub fn run<O: EnumerationObserver>(&self, observer: &mut O) -> Vec<Ride> {
        let delay_optimizer = DelayOptimizer::new(self.config.epsilon);
        let validator = BudgetValidator::new(self.constraints.scoring(), self.config.epsilon);
        let ctx = CandidateContext {
            requests: self.requests,
            oracle: self.oracle,
            config: &self.config,
            constraints: &self.constraints,
            delay_optimizer: &delay_optimizer,
        };

        let mut all_rides: Vec<Ride> = Vec::new();

        observer.on_degree_start(1);
        let singles = SingleRideBuilder::new(&ctx, &validator).build_all();
        observer.on_degree_end(1, singles.len());
        all_rides.extend(singles);

        if self.config.max_pooling_degree == 1 {
            return all_rides;
        }

        let time_filter = TimeFilter::new(self.requests);

        // Single-ride indices reserve the whole `[0, requests.len())` range
        // even when a request's own candidate is rejected — `ride.index`
        // there is the request's own index, not sequentially assigned — so
        // degree 2 must start at `requests.len()` regardless of how many
        // singles actually got admitted. `all_rides.len()` would collide
        // with a reserved-but-unused single index whenever one was rejected.
        let mut next_index = self.requests.len();

        observer.on_degree_start(2);
        let pairs = PairBuilder::new(&ctx, &validator, &time_filter).build_all(next_index);
        observer.on_degree_end(2, pairs.len());
        next_index += pairs.len();
        let mut previous_degree = pairs;
        all_rides.extend(previous_degree.clone());

        if self.config.max_pooling_degree >= 3 {
            // Built once: the graph is over degree-2 rides only, and that set
            // is already final at this point.
            let graph = ShareabilityGraph::build(self.requests.len(), &previous_degree);

            let mut degree = 2;
            while degree < self.config.max_pooling_degree {
                if previous_degree.is_empty() {
                    break;
                }

                observer.on_degree_start(degree + 1);
                let extender = RideExtender::new(&ctx, &validator, &graph);
                let next = extender.build_all(&previous_degree, next_index);
                observer.on_degree_end(degree + 1, next.len());
                next_index += next.len();

                all_rides.extend(next.clone());
                previous_degree = next;
                degree += 1;
            }
        }

        all_rides
    }
}

/// Fluent builder for [`EnumerationDriver`].
pub struct EnumerationDriverBuilder<'a> {
    requests: &'a [DrtRequest],
    oracle: &'a dyn NetworkOracle,
    config: EnumerationConfig,
}

impl<'a> EnumerationDriverBuilder<'a> {
    pub fn new(requests: &'a [DrtRequest], oracle: &'a dyn NetworkOracle, config: EnumerationConfig) -> Self {
        Self { requests, oracle, config }
    }

    /// Validate `config` and build a ready-to-run driver.
    ///
    /// An invalid configuration is fatal here — no enumeration is ever
    /// attempted.
    pub fn build(self, scoring: ScoringConfig) -> EnumerationResult<EnumerationDriver<'a>> {
        self.config.validate().map_err(EnumerationError::InvalidConfig)?;
        let constraints =
            ConstraintsCalculator::new(scoring, self.config.max_detour_factor, self.config.max_absolute_detour);
        Ok(EnumerationDriver {
            requests: self.requests,
            oracle: self.oracle,
            config: self.config,
            constraints,
        })
    }
}
