//! `DrtRequest` — one agent's candidate DRT trip.
//!
//! Produced by the (out-of-scope) demand preprocessor and handed to this
//! crate fully formed; the enumeration engine never mutates a `DrtRequest`
//! once constructed.

use crate::error::{CoreError, CoreResult};
use crate::ids::{GroupId, LinkId, PaxId, RequestId};

/// A single desired DRT trip by one person.
///
/// # Derived fields
///
/// `earliest_departure` / `latest_departure` are computed, not stored —
/// they are always `request_time ∓ max_{negative,positive}_delay`, and
/// keeping them as methods rather than fields rules out the two ever
/// drifting out of sync with `request_time`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrtRequest {
    pub index: RequestId,
    pub pax_id: PaxId,
    pub group_id: GroupId,
    pub origin_link: LinkId,
    pub destination_link: LinkId,

    /// Seconds from the run's epoch origin.
    pub request_time: f64,

    /// From the oracle at `request_time`.
    pub direct_travel_time: f64,
    pub direct_distance: f64,

    /// Latest/earliest departure offsets relative to `request_time`, both >= 0.
    pub max_positive_delay: f64,
    pub max_negative_delay: f64,

    /// Portion of `max_positive_delay` / `max_negative_delay` that is
    /// proportional to detour and must be reclaimed as detour grows
    /// (see DESIGN.md).
    pub positive_delay_rel_component: f64,
    pub negative_delay_rel_component: f64,

    /// Upper bound on in-vehicle time, derived upstream from detour factor
    /// and budget. Always >= `direct_travel_time`.
    pub max_travel_time: f64,

    /// Utility the requester would gain by taking DRT over their best
    /// baseline mode — the ceiling `BudgetValidator` checks realized service
    /// degradation against. Always >= 0.
    pub budget: f64,
}

impl DrtRequest {
    /// Validate invariants and construct a request.
    ///
    /// The demand preprocessor is expected to uphold these invariants on its
    /// own; this constructor exists so tests and defensive call sites can
    /// catch a malformed request at the boundary instead of producing NaN
    /// rides downstream.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: RequestId,
        pax_id: PaxId,
        group_id: GroupId,
        origin_link: LinkId,
        destination_link: LinkId,
        request_time: f64,
        direct_travel_time: f64,
        direct_distance: f64,
        max_positive_delay: f64,
        max_negative_delay: f64,
        positive_delay_rel_component: f64,
        negative_delay_rel_component: f64,
        max_travel_time: f64,
        budget: f64,
    ) -> CoreResult<Self> {
        let req = Self {
            index,
            pax_id,
            group_id,
            origin_link,
            destination_link,
            request_time,
            direct_travel_time,
            direct_distance,
            max_positive_delay,
            max_negative_delay,
            positive_delay_rel_component,
            negative_delay_rel_component,
            max_travel_time,
            budget,
        };
        req.validate()?;
        Ok(req)
    }

    fn validate(&self) -> CoreResult<()> {
        let fail = |reason: &'static str| {
            Err(CoreError::InvalidRequest {
                index: self.index.0,
                reason,
            })
        };
        let all_finite = [
            self.request_time,
            self.direct_travel_time,
            self.direct_distance,
            self.max_positive_delay,
            self.max_negative_delay,
            self.positive_delay_rel_component,
            self.negative_delay_rel_component,
            self.max_travel_time,
            self.budget,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return fail("all time/distance fields must be finite");
        }
        if self.direct_travel_time < 0.0 {
            return fail("direct_travel_time must be >= 0");
        }
        if self.direct_distance < 0.0 {
            return fail("direct_distance must be >= 0");
        }
        if self.max_positive_delay < 0.0 || self.max_negative_delay < 0.0 {
            return fail("max_positive_delay and max_negative_delay must be >= 0");
        }
        if self.positive_delay_rel_component < 0.0 || self.negative_delay_rel_component < 0.0 {
            return fail("positive_delay_rel_component and negative_delay_rel_component must be >= 0");
        }
        if self.max_travel_time < self.direct_travel_time {
            return fail("max_travel_time must be >= direct_travel_time");
        }
        if self.budget < 0.0 {
            return fail("budget must be >= 0");
        }
        Ok(())
    }

    #[inline]
    pub fn earliest_departure(&self) -> f64 {
        self.request_time - self.max_negative_delay
    }

    #[inline]
    pub fn latest_departure(&self) -> f64 {
        self.request_time + self.max_positive_delay
    }
}
