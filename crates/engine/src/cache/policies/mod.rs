//! Cache Replacement Policies.
//!
//! Implements the victim-ranking strategies for the set-associative store.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used.
//!
//! Each line carries one metadata word; a policy defines what that word
//! means and how it orders eviction. The store selects as victim the way
//! whose metadata ranks lowest, breaking ties toward the lowest way number.
//! A never-filled way has metadata zero and therefore always ranks below
//! any filled way, so cold slots are consumed before anything is evicted.

/// Least Recently Used replacement policy.
pub mod lru;

/// Least Frequently Used replacement policy.
pub mod lfu;

pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

/// Trait for cache replacement policies.
///
/// Defines how a line's metadata word is updated on a hit, reset on a line
/// fill, and ranked for eviction.
pub trait ReplacementPolicy: Send + Sync {
    /// Returns the new metadata for a line that was just hit.
    ///
    /// # Arguments
    ///
    /// * `meta` - The line's current metadata word.
    /// * `clock` - The store's logical clock at the time of the access.
    fn touch(&self, meta: u64, clock: u64) -> u64;

    /// Returns the metadata for a line that was just filled.
    ///
    /// The returned value must rank above an untouched (zero) metadata word
    /// so that freshly filled lines are not immediately re-selected while
    /// cold ways remain.
    ///
    /// # Arguments
    ///
    /// * `clock` - The store's logical clock at the time of the fill.
    fn fill(&self, clock: u64) -> u64;

    /// Ranks a way's eviction priority from its metadata word.
    ///
    /// # Returns
    ///
    /// The eviction rank; the way with the lowest rank in a set is the
    /// victim.
    fn rank(&self, meta: u64) -> u64;
}
