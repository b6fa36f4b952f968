//! Unit tests for the cache engine core.
//!
//! Split by concern: address geometry derivation and decomposition,
//! replacement-policy metadata semantics, and the full read path
//! (hit/miss, victim selection, line fill, wrap behavior).


/// Replacement policy metadata semantics (LRU, LFU).
pub mod policies;
