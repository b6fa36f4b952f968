//! Configuration for the cache simulator.
//!
//! This module defines the structures used to parameterize the cache. It provides:
//! 1. **Defaults:** Baseline geometry constants (total size, ways, line size, address width).
//! 2. **Structures:** The per-cache geometry and policy configuration.
//! 3. **Enums:** Replacement policy selection.
//!
//! Configuration is supplied via JSON (`serde_json`) or use `CacheConfig::default()`.
//! Geometry invariants are validated once at construction time by
//! [`Geometry::new`](crate::cache::Geometry::new), not during deserialization.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline cache geometry when not explicitly
/// overridden: an 8 KiB, 4-way cache with 64-byte lines and 32-bit addresses
/// (32 sets, 6 offset bits, 5 index bits, 21 tag bits).
mod defaults {
    /// Default total cache size in bytes (8 KiB).
    pub const CACHE_SIZE: usize = 8192;

    /// Default cache associativity (4 ways per set).
    pub const CACHE_WAYS: usize = 4;

    /// Default cache line size in bytes (64 bytes).
    ///
    /// Matches typical modern processor cache line sizes.
    pub const CACHE_LINE: usize = 64;

    /// Default address width in bits (32-bit address space).
    pub const ADDRESS_BITS: u32 = 32;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which cache line to evict
/// when a new line must be installed in a full cache set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the cache line that was accessed least recently.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Least Frequently Used replacement policy.
    ///
    /// Evicts the cache line with the lowest cumulative access count.
    #[serde(alias = "Lfu")]
    Lfu,
}

/// Cache geometry and policy configuration.
///
/// Geometry is fixed at construction and never changes afterwards. The
/// invariants (power-of-two set and line counts, address width at least
/// `index_bits + offset_bits`) are enforced when a
/// [`Cache`](crate::cache::Cache) or
/// [`Geometry`](crate::cache::Geometry) is built from this configuration.
///
/// # Examples
///
/// Deserializing from JSON:
///
/// ```
/// use cachesim_core::config::{CacheConfig, ReplacementPolicy};
///
/// let json = r#"{
///     "size_bytes": 256,
///     "ways": 2,
///     "line_bytes": 64,
///     "address_bits": 32,
///     "policy": "LFU"
/// }"#;
///
/// let config: CacheConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.size_bytes, 256);
/// assert_eq!(config.policy, ReplacementPolicy::Lfu);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Total cache size in bytes (`sets * ways * line_bytes`).
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Associativity (number of ways per set).
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Cache line size in bytes.
    #[serde(default = "CacheConfig::default_line")]
    pub line_bytes: usize,

    /// Address width in bits (1 to 64).
    ///
    /// Address bits above this width are not masked off; they flow into the
    /// tag during decomposition.
    #[serde(default = "CacheConfig::default_address_bits")]
    pub address_bits: u32,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    /// Returns the default total cache size in bytes.
    fn default_size() -> usize {
        defaults::CACHE_SIZE
    }

    /// Returns the default cache associativity (number of ways).
    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    /// Returns the default cache line size in bytes.
    fn default_line() -> usize {
        defaults::CACHE_LINE
    }

    /// Returns the default address width in bits.
    fn default_address_bits() -> u32 {
        defaults::ADDRESS_BITS
    }
}

impl Default for CacheConfig {
    /// Creates the default cache configuration.
    ///
    /// 8 KiB total, 4-way set-associative, 64-byte lines, 32-bit addresses,
    /// LRU replacement.
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            ways: defaults::CACHE_WAYS,
            line_bytes: defaults::CACHE_LINE,
            address_bits: defaults::ADDRESS_BITS,
            policy: ReplacementPolicy::default(),
        }
    }
}
