//! Cache Replacement Policy Tests.
//!
//! Verifies the metadata semantics of LRU and LFU in isolation: what a hit
//! does to a line's metadata, what a fill resets it to, and how metadata
//! ranks ways for eviction. The store-level consequences (which line
//! actually gets evicted) are covered in the read-path tests.

use cachesim_core::cache::policies::{LfuPolicy, LruPolicy, ReplacementPolicy};

// ══════════════════════════════════════════════════════════
// 1. LRU Policy
// ══════════════════════════════════════════════════════════

/// LRU stamps the line with the access clock, on hit and on fill alike.
#[test]
fn lru_stamps_with_clock() {
    let policy = LruPolicy;

    assert_eq!(policy.touch(7, 42), 42);
    assert_eq!(policy.fill(42), 42);
}

/// LRU ranks by recency: an older stamp ranks (and evicts) first.
#[test]
fn lru_older_stamp_ranks_lower() {
    let policy = LruPolicy;

    let old = policy.fill(3);
    let new = policy.fill(9);
    assert!(policy.rank(old) < policy.rank(new));
}

/// A hit brings a line's rank above every line stamped earlier.
#[test]
fn lru_touch_promotes_over_earlier_stamps() {
    let policy = LruPolicy;

    let a = policy.fill(1);
    let b = policy.fill(2);
    let a = policy.touch(a, 3);
    assert!(policy.rank(b) < policy.rank(a));
}

/// A never-used way (metadata 0) ranks below any fill at clock >= 1.
#[test]
fn lru_unused_way_ranks_below_any_fill() {
    let policy = LruPolicy;
    assert!(policy.rank(0) < policy.rank(policy.fill(1)));
}

// ══════════════════════════════════════════════════════════
// 2. LFU Policy
// ══════════════════════════════════════════════════════════

/// A fill counts as the line's first use.
#[test]
fn lfu_fill_counts_as_one_use() {
    let policy = LfuPolicy;
    assert_eq!(policy.fill(99), 1);
}

/// Each hit increments the access count; the clock is ignored.
#[test]
fn lfu_touch_increments_count() {
    let policy = LfuPolicy;

    let mut meta = policy.fill(0);
    meta = policy.touch(meta, 1000);
    meta = policy.touch(meta, 5);
    assert_eq!(meta, 3);
}

/// The counter saturates instead of wrapping back to the global minimum.
#[test]
fn lfu_count_saturates() {
    let policy = LfuPolicy;
    assert_eq!(policy.touch(u64::MAX, 1), u64::MAX);
}

/// LFU ranks by frequency: fewer uses rank (and evict) first.
#[test]
fn lfu_fewer_uses_rank_lower() {
    let policy = LfuPolicy;

    let cold = policy.fill(10);
    let hot = policy.touch(policy.touch(policy.fill(2), 3), 4);
    assert!(policy.rank(cold) < policy.rank(hot));
}

/// A never-used way (metadata 0) ranks below a just-filled line.
#[test]
fn lfu_unused_way_ranks_below_any_fill() {
    let policy = LfuPolicy;
    assert!(policy.rank(0) < policy.rank(policy.fill(0)));
}

// ══════════════════════════════════════════════════════════
// 3. Trait Objects
// ══════════════════════════════════════════════════════════

/// Policies are object-safe: the store boxes them behind the trait.
#[test]
fn policies_work_behind_trait_objects() {
    let policies: Vec<Box<dyn ReplacementPolicy>> = vec![Box::new(LruPolicy), Box::new(LfuPolicy)];

    for policy in &policies {
        let filled = policy.fill(1);
        assert!(policy.rank(0) < policy.rank(filled));
    }
}
