//! `ConstraintsCalculator` — converts a per-trip utility budget into a
//! maximum additional in-vehicle time.

/// Opaque scoring weights supplied by the embedding application's mode-
/// scoring model. Treated as constants here.
#[derive(Copy, Clone, Debug)]
pub struct ScoringConfig {
    pub u_time: f64,
    pub u_dist: f64,
    pub avg_speed: f64,
}

/// Pure conversion from a utility budget to a bounded detour-time allowance.
pub struct ConstraintsCalculator {
    scoring: ScoringConfig,
    max_detour_factor: f64,
    max_absolute_detour: Option<f64>,
}

impl ConstraintsCalculator {
    pub fn new(scoring: ScoringConfig, max_detour_factor: f64, max_absolute_detour: Option<f64>) -> Self {
        Self { scoring, max_detour_factor, max_absolute_detour }
    }

    /// The scoring weights this calculator was built with — `EnumerationDriver`
    /// reuses them to construct the co-located `BudgetValidator`.
    pub fn scoring(&self) -> ScoringConfig {
        self.scoring
    }

    /// Maximum *additional* in-vehicle time a request's `budget` admits,
    /// intersected with the configured `maxDetourFactor` and
    /// `maxAbsoluteDetour` ceilings.
    ///
    /// `_direct_distance` is accepted for signature parity with the
    /// distance-aware scoring model, but the budget-to-time conversion
    /// itself does not reference it —
    /// only `directTravelTime` feeds the factor-derived ceiling.
    pub fn max_detour_time(&self, budget: f64, direct_travel_time: f64, _direct_distance: f64) -> f64 {
        let denom = self.scoring.u_time.abs() + self.scoring.u_dist.abs() * self.scoring.avg_speed;
        let from_budget = if denom > 0.0 { budget / denom } else { f64::INFINITY };

        // `max_detour_factor` bounds the ratio `ptt / direct_tt`, so the
        // additional-time ceiling it implies is `(factor - 1) * direct_tt`
        // (see DESIGN.md).
        let factor_cap = (self.max_detour_factor - 1.0) * direct_travel_time;

        let mut cap = from_budget.min(factor_cap);
        if let Some(abs) = self.max_absolute_detour {
            cap = cap.min(abs);
        }
        cap.max(0.0)
    }
}
