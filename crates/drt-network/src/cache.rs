//! `TravelSegmentCache` — time-binned memoization of oracle results.
//!
//! # Concurrency
//!
//! Backed by `dashmap::DashMap`, a sharded concurrent hash map: readers
//! never block writers on other shards, and two threads racing on the same
//! key's miss both compute the (pure, deterministic) segment and the
//! `entry().or_insert_with()` call resolves to whichever write lands first —
//! first-wins, with the discarded duplicate compute simply thrown away.

use std::path::Path;

use dashmap::DashMap;
use drt_core::{LinkId, TravelSegment};
use serde::{Deserialize, Serialize};

use crate::error::NetworkResult;

/// `(origin, destination, time bin)` — the cache key. `time_bin =
/// floor(departure_time / bin_size)`.
pub type CacheKey = (LinkId, LinkId, i64);

/// Time-binned, thread-safe memoization table for `NetworkOracle::get_segment`.
#[derive(Default)]
pub struct TravelSegmentCache {
    inner: DashMap<CacheKey, TravelSegment>,
}

impl TravelSegmentCache {
    pub fn new() -> Self {
        Self { inner: DashMap::new() }
    }

    pub fn time_bin(departure_time: f64, bin_size: f64) -> i64 {
        (departure_time / bin_size).floor() as i64
    }

    pub fn get(&self, key: CacheKey) -> Option<TravelSegment> {
        self.inner.get(&key).map(|entry| *entry)
    }

    pub fn insert(&self, key: CacheKey, segment: TravelSegment) {
        self.inner.entry(key).or_insert(segment);
    }

    /// Look up `key`, or compute and insert it via `compute` on a miss.
    ///
    /// `compute` may run more than once under concurrent misses on the same
    /// key; only one result is kept (first-wins), which is safe because
    /// `compute` is a pure function of `key`.
    pub fn get_or_insert_with(
        &self,
        key: CacheKey,
        compute: impl FnOnce() -> TravelSegment,
    ) -> TravelSegment {
        if let Some(existing) = self.inner.get(&key) {
            return *existing;
        }
        let value = compute();
        *self.inner.entry(key).or_insert(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Write all **reachable** entries to `path` as
    /// `origin,dest,time_bin,travel_time,distance,utility`. Unreachable
    /// entries are never stored in the first place (see
    /// [`TravelSegmentCache::get_or_insert_with`] callers), so there is
    /// nothing to filter here.
    pub fn dump_csv(&self, path: &Path) -> NetworkResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["origin", "dest", "time_bin", "travel_time", "distance", "utility"])?;
        for entry in self.inner.iter() {
            let (origin, dest, bin) = *entry.key();
            let seg = *entry.value();
            if !seg.is_reachable() {
                continue;
            }
            writer.write_record(&[
                origin.0.to_string(),
                dest.0.to_string(),
                bin.to_string(),
                seg.travel_time.to_string(),
                seg.distance.to_string(),
                seg.network_utility.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Load entries from a CSV file written by [`dump_csv`](Self::dump_csv),
    /// merging into this cache (existing entries are not cleared first —
    /// call [`clear`](Self::clear) beforehand for a true round trip).
    pub fn load_csv(&self, path: &Path) -> NetworkResult<()> {
        let mut reader = csv::Reader::from_path(path)?;
        for result in reader.deserialize::<CacheRow>() {
            let row = result?;
            let key = (LinkId(row.origin), LinkId(row.dest), row.time_bin);
            let segment = TravelSegment {
                travel_time: row.travel_time,
                distance: row.distance,
                network_utility: row.utility,
            };
            self.inner.insert(key, segment);
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct CacheRow {
    origin: u32,
    dest: u32,
    time_bin: i64,
    travel_time: f64,
    distance: f64,
    utility: f64,
}
