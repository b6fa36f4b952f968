//! Read/hit/miss statistics collection and reporting.
//!
//! This module tracks access counts for the cache. It provides:
//! 1. **Counters:** Total reads and their hit/miss split.
//! 2. **Derived metrics:** Hit rate.
//! 3. **Reporting:** A one-line `Display` summary for drivers.

use std::fmt;

/// Access statistics for one cache instance.
///
/// Maintained by `Cache::read`; exposed read-only through
/// [`Cache::stats`](crate::cache::Cache::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total reads served (hits + misses).
    pub reads: u64,
    /// Reads that found a valid matching tag.
    pub hits: u64,
    /// Reads that required a line fill.
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of reads that hit, in `[0.0, 1.0]`; zero before any read.
    pub fn hit_rate(&self) -> f64 {
        if self.reads == 0 {
            0.0
        } else {
            self.hits as f64 / self.reads as f64
        }
    }

    /// Records the outcome of one read.
    pub(crate) fn record(&mut self, hit: bool) {
        self.reads += 1;
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reads: {}, hits: {}, misses: {}, hit rate: {:.2}%",
            self.reads,
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )
    }
}
