//! Enumeration observer trait for progress reporting and diagnostics.

/// Callbacks invoked by [`EnumerationDriver::run`][crate::EnumerationDriver::run]
/// at key points in the degree-by-degree enumeration.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about. This crate carries no logging
/// dependency of its own — the driver's pure-library callers decide how (or
/// whether) to surface progress, mirroring the hook pattern used by the
/// sibling simulation crate in this workspace.
pub trait EnumerationObserver {
    /// Called before candidate collection begins for `degree`.
    fn on_degree_start(&mut self, _degree: usize) {}

    /// Called after the parallel candidate-collection phase for `degree`,
    /// before sequential validation begins.
    fn on_candidates_collected(&mut self, _degree: usize, _candidate_count: usize) {}

    /// Called once `degree` is fully validated and indexed.
    fn on_degree_end(&mut self, _degree: usize, _admitted_count: usize) {}

    /// Called once after enumeration completes, reporting the final size of
    /// the network oracle's travel-segment cache.
    fn on_cache_stats(&mut self, _entries: usize) {}
}

/// An [`EnumerationObserver`] that does nothing.
pub struct NoopObserver;

impl EnumerationObserver for NoopObserver {}
