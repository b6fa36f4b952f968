//! Least Frequently Used (LFU) Replacement Policy.
//!
//! This policy evicts the cache line with the lowest cumulative access
//! count. Each line's metadata is a saturating hit counter, reset to one
//! when the line is filled (the fill itself is its first use); the lowest
//! count in a set is the eviction victim.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()` / `fill()` / `rank()`: O(1)
//! - **Space Complexity:** One metadata word per line
//! - **Best Case:** A stable hot working set with occasional streaming traffic
//! - **Worst Case:** Working-set shifts — stale lines with high historical
//!   counts resist eviction

use super::ReplacementPolicy;

/// LFU policy: metadata is a cumulative access count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LfuPolicy;

impl ReplacementPolicy for LfuPolicy {
    /// Increments the line's access count.
    fn touch(&self, meta: u64, _clock: u64) -> u64 {
        meta.saturating_add(1)
    }

    /// A freshly filled line has been used exactly once.
    fn fill(&self, _clock: u64) -> u64 {
        1
    }

    /// Lower access counts rank lower and are evicted first.
    fn rank(&self, meta: u64) -> u64 {
        meta
    }
}
