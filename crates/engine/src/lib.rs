//! Set-associative cache simulator library.
//!
//! This crate models a set-associative hardware cache in front of a flat
//! byte-addressable memory image. It provides:
//! 1. **Geometry:** Tag/index/offset address decomposition derived from the cache configuration.
//! 2. **Store:** The set-associative line store with fetch-on-miss line fill from backing memory.
//! 3. **Policies:** Pluggable replacement (LRU, LFU) driving victim selection.
//! 4. **Simulation:** Backing-memory loader and an address-sequence driver.
//! 5. **Statistics:** Read/hit/miss accounting for replacement-policy studies.

/// Set-associative store, address geometry, and replacement policies.
pub mod cache;
/// Cache configuration (defaults, policy selection).
pub mod config;
/// Construction-time and loader error types.
pub mod error;
/// Backing-memory loader and address-sequence runner.
pub mod sim;
/// Read/hit/miss statistics collection and reporting.
pub mod stats;

/// Main store type; construct with [`Cache::new`] and drive with `read`.
pub use crate::cache::Cache;
/// Cache geometry configuration; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
