//! `SingleRideBuilder` — degree-1 ride construction.

use drt_budget::BudgetValidator;
use drt_core::{Ride, RideId};

use crate::candidate::CandidateContext;

/// Builds every degree-1 ride, sequentially, in request-index order.
///
/// Admitted rides keep `index == request.index` — single rides occupy the
/// low index range `[0, |requests|)`, reserved for them by the driver before
/// any pair or higher-degree ride is assigned an index.
pub struct SingleRideBuilder<'a> {
    ctx: &'a CandidateContext<'a>,
    validator: &'a BudgetValidator,
}

impl<'a> SingleRideBuilder<'a> {
    pub fn new(ctx: &'a CandidateContext<'a>, validator: &'a BudgetValidator) -> Self {
        Self { ctx, validator }
    }

    pub fn build_all(&self) -> Vec<Ride> {
        let mut rides = Vec::with_capacity(self.ctx.requests.len());
        for request in self.ctx.requests {
            let Some(candidate) = self.ctx.build(vec![request.index], vec![request.index]) else {
                continue;
            };
            let Some(mut ride) = self.validator.validate_and_populate(candidate, self.ctx.requests) else {
                continue;
            };
            ride.index = RideId::try_from(request.index.index()).expect("request count fits RideId");
            rides.push(ride);
        }
        rides
    }
}
