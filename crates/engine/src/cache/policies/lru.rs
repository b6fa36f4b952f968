//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been accessed for the
//! longest time. Each line's metadata records the logical clock of its most
//! recent access; the lowest clock value in a set is the least recently
//! used line and the eviction victim.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()` / `fill()` / `rank()`: O(1)
//! - **Space Complexity:** One metadata word per line
//! - **Best Case:** Accesses with strong temporal locality
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use super::ReplacementPolicy;

/// LRU policy: metadata is the logical clock of the last access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Stamps the line with the current logical clock.
    fn touch(&self, _meta: u64, clock: u64) -> u64 {
        clock
    }

    /// A freshly filled line counts as just used.
    fn fill(&self, clock: u64) -> u64 {
        clock
    }

    /// Older clock stamps rank lower and are evicted first.
    fn rank(&self, meta: u64) -> u64 {
        meta
    }
}
