//! `RideExtender` — degree `k` → `k + 1` ride extension.

use std::collections::HashSet;

use rayon::prelude::*;

use drt_budget::BudgetValidator;
use drt_core::{Ride, RideId, RideKind};
use drt_core::{PaxId, RequestId};

use crate::candidate::{kind_rank, CandidateContext};
use crate::graph::ShareabilityGraph;

/// Whether an existing participant's drop-off must precede or follow the
/// new request's drop-off, or is unconstrained because both a FIFO and a
/// LIFO edge connect them.
#[derive(Copy, Clone, PartialEq, Eq)]
enum DropoffReq {
    Before,
    After,
    Either,
}

/// Extends every admitted degree-`k` ride by one admissible request, for
/// `k` from 2 up to `max_pooling_degree - 1`.
///
/// # Insertion search
///
/// For a base ride with participants `P` and a candidate request `q`
/// connected to every member of `P` in the [`ShareabilityGraph`], the pickup
/// insertion point fixes, for each `p ∈ P`, whether `p` precedes or follows
/// `q` in the new pickup order. Combined with the FIFO/LIFO kind of the
/// `(p, q)` edge, that pins a required relative order for the drop-off side
/// too. A single drop-off insertion gap satisfying every participant's
/// requirement exists only when those requirements are jointly monotonic
/// (see DESIGN.md); this collapses what looks like an `O(k)`-position search
/// per `q` down to at most one trial sequence per pickup gap, i.e. `k + 1`
/// trial sequences per `(base ride, q)` pair.
pub struct RideExtender<'a> {
    ctx: &'a CandidateContext<'a>,
    validator: &'a BudgetValidator,
    graph: &'a ShareabilityGraph,
}

impl<'a> RideExtender<'a> {
    pub fn new(ctx: &'a CandidateContext<'a>, validator: &'a BudgetValidator, graph: &'a ShareabilityGraph) -> Self {
        Self { ctx, validator, graph }
    }

    /// Extend every ride in `base_rides` (all must share `degree == k`) by
    /// one request. Admitted indices start at `start_index`.
    pub fn build_all(&self, base_rides: &[Ride], start_index: usize) -> Vec<Ride> {
        let mut candidates: Vec<Ride> = base_rides
            .par_iter()
            .flat_map(|base| self.candidates_for(base))
            .collect();

        candidates.sort_by(|a, b| {
            let ai: Vec<u32> = a.requests.iter().map(|r| r.0).collect();
            let bi: Vec<u32> = b.requests.iter().map(|r| r.0).collect();
            ai.cmp(&bi)
                .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
                .then_with(|| pickup_key(a).cmp(&pickup_key(b)))
                .then_with(|| dropoff_key(a).cmp(&dropoff_key(b)))
        });
        candidates.dedup_by(|a, b| a.requests == b.requests && a.origins_ordered == b.origins_ordered && a.destinations_ordered == b.destinations_ordered);

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

    fn candidates_for(&self, base: &Ride) -> Vec<Ride> {
        let mut out = Vec::new();
        for q in self.admissible_extensions(base) {
            let degree = base.degree;
            for pickup_gap in 0..=degree {
                let mut origins = base.origins_ordered.clone();
                origins.insert(pickup_gap, q);

                let Some(dropoff_range) = self.dropoff_range(base, q, pickup_gap) else {
                    continue;
                };
                for dropoff_gap in dropoff_range {
                    let mut destinations = base.destinations_ordered.clone();
                    destinations.insert(dropoff_gap, q);
                    if let Some(ride) = self.ctx.build(origins.clone(), destinations) {
                        out.push(ride);
                    }
                }
            }
        }
        out
    }

    /// Requests connected to every participant of `base` by at least one
    /// shareability edge, excluding current participants and anyone sharing
    /// a `PaxId` with one.
    fn admissible_extensions(&self, base: &Ride) -> Vec<RequestId> {
        let requests = self.ctx.requests;
        let mut candidate_set: Option<HashSet<RequestId>> = None;
        for &p in &base.requests {
            let neighbors: HashSet<RequestId> =
                self.graph.neighbors(p).iter().map(|&(other, _, _)| other).collect();
            candidate_set = Some(match candidate_set {
                None => neighbors,
                Some(acc) => acc.intersection(&neighbors).copied().collect(),
            });
        }

        let participant_pax: HashSet<PaxId> = base.requests.iter().map(|&r| requests[r.index()].pax_id).collect();

        let mut candidates: Vec<RequestId> = candidate_set
            .unwrap_or_default()
            .into_iter()
            .filter(|q| !base.requests.contains(q))
            .filter(|q| !participant_pax.contains(&requests[q.index()].pax_id))
            .collect();
        candidates.sort_by_key(|id| id.index());
        candidates
    }

    /// Inclusive range of feasible drop-off insertion gaps for `q` given
    /// `pickup_gap`, or `None` if no single gap satisfies every
    /// participant's FIFO/LIFO requirement.
    fn dropoff_range(&self, base: &Ride, q: RequestId, pickup_gap: usize) -> Option<std::ops::RangeInclusive<usize>> {
        let degree = base.degree;
        let mut lower = 0usize;
        let mut upper = degree;

        for (pickup_pos, &p) in base.origins_ordered.iter().enumerate() {
            let q_before_p_in_pickup = pickup_gap <= pickup_pos;
            let edges = self.graph.edges_between(p, q);
            let req = dropoff_requirement(&edges, q_before_p_in_pickup);

            let dropoff_pos = base
                .destinations_ordered
                .iter()
                .position(|&r| r == p)
                .expect("participant present in destinations_ordered");

            match req {
                DropoffReq::Before => upper = upper.min(dropoff_pos),
                DropoffReq::After => lower = lower.max(dropoff_pos + 1),
                DropoffReq::Either => {}
            }
        }

        if lower <= upper {
            Some(lower..=upper)
        } else {
            None
        }
    }
}

/// Derive the required drop-off relative order of `q` versus a participant
/// `p`, given the kind(s) of edge connecting them and whether `q` precedes
/// `p` in the chosen pickup order.
///
/// FIFO preserves relative order between pickup and drop-off; LIFO reverses
/// it. When both a FIFO and a LIFO edge connect `p` and `q`, either order
/// satisfies some admitted pair ride, so `p` imposes no constraint.
fn dropoff_requirement(edges: &[(RideId, RideKind)], q_before_p_in_pickup: bool) -> DropoffReq {
    let has_fifo = edges.iter().any(|&(_, k)| k == RideKind::Fifo);
    let has_lifo = edges.iter().any(|&(_, k)| k == RideKind::Lifo);

    if has_fifo && has_lifo {
        return DropoffReq::Either;
    }
    if has_fifo {
        return if q_before_p_in_pickup {
            DropoffReq::Before
        } else {
            DropoffReq::After
        };
    }
    if has_lifo {
        return if q_before_p_in_pickup {
            DropoffReq::After
        } else {
            DropoffReq::Before
        };
    }
    // Admissibility guarantees at least one edge; this arm is unreachable
    // in practice but is handled defensively rather than panicking.
    DropoffReq::Either
}

fn pickup_key(ride: &Ride) -> Vec<u32> {
    ride.origins_ordered.iter().map(|r| r.0).collect()
}

fn dropoff_key(ride: &Ride) -> Vec<u32> {
    ride.destinations_ordered.iter().map(|r| r.0).collect()
}
