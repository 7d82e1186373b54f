//! `DelayOptimizer` — one-dimensional feasibility search over a ride's
//! departure-time shift.

/// Solves: given initial per-passenger delays `d` and effective allowances
/// `max_pos`/`max_neg`, find a single scalar shift `δ` such that every
/// adjusted delay `d[i] + δ` lies in `[-max_neg[i], max_pos[i]]`.
///
/// Stateless and re-entrant; the same instance is shared unchanged by the
/// pair builder (`n = 2`) and the ride extender (`n = k`).
pub struct DelayOptimizer {
    epsilon: f64,
}

impl DelayOptimizer {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Returns the adjusted delay vector `d' = d + δ*`, or `None` if no
    /// feasible `δ` exists. `d`, `max_pos`, and `max_neg` must have equal,
    /// non-zero length.
    pub fn optimize(&self, d: &[f64], max_pos: &[f64], max_neg: &[f64]) -> Option<Vec<f64>> {
        debug_assert_eq!(d.len(), max_pos.len());
        debug_assert_eq!(d.len(), max_neg.len());

        // Step 1: a priori empty interval for any passenger.
        for i in 0..d.len() {
            if max_pos[i] < -max_neg[i] {
                return None;
            }
        }

        // Step 2: intersect every passenger's feasible shift interval.
        let lower = (0..d.len())
            .map(|i| -d[i] - max_neg[i])
            .fold(f64::NEG_INFINITY, f64::max);
        let upper = (0..d.len())
            .map(|i| max_pos[i] - d[i])
            .fold(f64::INFINITY, f64::min);
        if lower > upper + self.epsilon {
            return None;
        }

        // Step 3: centre the most- and least-delayed passengers, then clamp.
        let max_d = d.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_d = d.iter().copied().fold(f64::INFINITY, f64::min);
        let shift = (-(max_d + min_d) / 2.0).clamp(lower, upper);

        // Step 4: paranoid re-verify against floating-point drift.
        let adjusted: Vec<f64> = d.iter().map(|&di| di + shift).collect();
        for i in 0..adjusted.len() {
            if adjusted[i] < -max_neg[i] - self.epsilon || adjusted[i] > max_pos[i] + self.epsilon {
                return None;
            }
        }

        Some(adjusted)
    }
}
