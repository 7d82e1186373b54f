//! `PairBuilder` — degree-2 ride enumeration.

use rayon::prelude::*;

use drt_budget::BudgetValidator;
use drt_core::{DrtRequest, Ride, RideId};
use drt_temporal::TimeFilter;

use crate::candidate::{kind_rank, CandidateContext};

/// Produces every degree-2 ride: FIFO (pickup `[i, j]`, drop-off `[i, j]`)
/// and LIFO (pickup `[i, j]`, drop-off `[j, i]`).
///
/// # Pair canonicalization
///
/// Each unordered pair `{i, j}` is capped at two shareability
/// edges (one FIFO, one LIFO), so every pair is attempted in exactly one
/// role assignment: `i` is always the lower-indexed request. This also makes
/// the outer loop over `i` embarrassingly parallel — no worker's output can
/// collide with another's (see DESIGN.md).
pub struct PairBuilder<'a> {
    ctx: &'a CandidateContext<'a>,
    validator: &'a BudgetValidator,
    time_filter: &'a TimeFilter,
}

impl<'a> PairBuilder<'a> {
    pub fn new(ctx: &'a CandidateContext<'a>, validator: &'a BudgetValidator, time_filter: &'a TimeFilter) -> Self {
        Self { ctx, validator, time_filter }
    }

    /// Build and admit every feasible pair ride. Admitted indices start at
    /// `start_index` (conventionally `requests.len()`, §4.6).
    pub fn build_all(&self, start_index: usize) -> Vec<Ride> {
        let horizon = self.ctx.config.search_horizon;

        let mut candidates: Vec<Ride> = self
            .ctx
            .requests
            .par_iter()
            .flat_map(|i_req| self.candidates_for(i_req, horizon))
            .collect();

        candidates.sort_by(|a, b| {
            let (ai, aj) = (a.origins_ordered[0].index(), a.origins_ordered[1].index());
            let (bi, bj) = (b.origins_ordered[0].index(), b.origins_ordered[1].index());
            ai.cmp(&bi).then(aj.cmp(&bj)).then(kind_rank(a.kind).cmp(&kind_rank(b.kind)))
        });

        let mut rides = Vec::with_capacity(candidates.len());
        let mut next_index = start_index;
        for candidate in candidates {
            if let Some(mut ride) = self.validator.validate_and_populate(candidate, self.ctx.requests) {
                ride.index = RideId::try_from(next_index).expect("ride count fits RideId");
                next_index += 1;
                rides.push(ride);
            }
        }
        rides
    }

    /// Every feasible FIFO/LIFO candidate with `i_req` as the first pickup.
    fn candidates_for(&self, i_req: &DrtRequest, horizon: f64) -> Vec<Ride> {
        let mut out = Vec::new();
        let requests = self.ctx.requests;

        for j_id in self.time_filter.find_candidates_in_horizon(i_req.index, horizon) {
            if j_id.index() <= i_req.index.index() {
                continue;
            }
            let j_req = &requests[j_id.index()];

            if i_req.pax_id == j_req.pax_id {
                continue;
            }
            if !quick_reject_passes(i_req, j_req) {
                continue;
            }

            let oo = self.ctx.oracle.get_segment(i_req.origin_link, j_req.origin_link, i_req.request_time);
            if !oo.is_reachable() {
                continue;
            }
            if i_req.latest_departure() + oo.travel_time < j_req.earliest_departure() {
                continue;
            }
            if i_req.earliest_departure() + oo.travel_time > j_req.latest_departure() {
                continue;
            }

            if let Some(fifo) = self.ctx.build(vec![i_req.index, j_req.index], vec![i_req.index, j_req.index]) {
                out.push(fifo);
            }
            if let Some(lifo) = self.ctx.build(vec![i_req.index, j_req.index], vec![j_req.index, i_req.index]) {
                out.push(lifo);
            }
        }
        out
    }
}

/// Quick temporal reject, both directions, before any oracle call.
fn quick_reject_passes(i: &DrtRequest, j: &DrtRequest) -> bool {
    j.latest_departure() >= i.earliest_departure()
        && j.earliest_departure() <= i.latest_departure() + i.direct_travel_time
}
