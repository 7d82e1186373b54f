//! `TimeFilter` — temporal candidate pruning for pair search.

use drt_core::{DrtRequest, RequestId};

/// Answers "which other requests could possibly pair with request `i` within
/// horizon `H`?" without an O(n²) scan.
///
/// # Sort key
///
/// The window is defined purely in terms of `requestTime` (`T(i)`), so that
/// is the sort key used for the binary search (see DESIGN.md).
pub struct TimeFilter {
    /// `(request id, request_time)`, sorted ascending by `request_time`.
    sorted: Vec<(RequestId, f64)>,
    /// `position_of[id.index()]` = this id's slot in `sorted`.
    position_of: Vec<usize>,
}

impl TimeFilter {
    /// Build the filter over `requests`. `requests[i].index` must equal `i`
    /// for every `i` — the filter is keyed by dense position, matching the
    /// convention every other `drt-enumerate` component relies on.
    pub fn new(requests: &[DrtRequest]) -> Self {
        let mut sorted: Vec<(RequestId, f64)> =
            requests.iter().map(|r| (r.index, r.request_time)).collect();
        sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut position_of = vec![0usize; requests.len()];
        for (pos, &(id, _)) in sorted.iter().enumerate() {
            position_of[id.index()] = pos;
        }

        Self { sorted, position_of }
    }

    /// Every index `j != i` whose `request_time` falls in
    /// `[T(i) - horizon, T(i) + horizon]`, sorted ascending by `RequestId`.
    pub fn find_candidates_in_horizon(&self, i: RequestId, horizon: f64) -> Vec<RequestId> {
        let pos = self.position_of[i.index()];
        let t = self.sorted[pos].1;
        let lo = t - horizon;
        let hi = t + horizon;

        let start = self.sorted.partition_point(|&(_, tj)| tj < lo);
        let end = self.sorted.partition_point(|&(_, tj)| tj <= hi);

        let mut out: Vec<RequestId> = self.sorted[start..end]
            .iter()
            .map(|&(id, _)| id)
            .filter(|&id| id != i)
            .collect();
        out.sort_by_key(|id| id.index());
        out
    }
}
