//! Error definitions for the cache simulator.
//!
//! This module defines the failure modes of the engine. It provides:
//! 1. **Configuration violations:** Geometry invariants broken at construction time.
//! 2. **Construction failures:** Backing memory too small to serve a line fill.
//! 3. **Loader failures:** I/O errors while reading a backing-memory file.
//!
//! `Cache::read` itself is infallible: every failure is rejected up front,
//! when the cache is constructed, so lookups never have to report errors.

use thiserror::Error;

/// Violations of the cache geometry invariants.
///
/// Raised once, at construction time, when a
/// [`CacheConfig`](crate::config::CacheConfig) is inconsistent. The cache is
/// never built from a malformed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A geometry field that must be non-zero was zero.
    #[error("{field} must be non-zero")]
    ZeroField {
        /// Name of the offending configuration field.
        field: &'static str,
    },

    /// A field that must be a power of two was not.
    ///
    /// Applies to `line_bytes` and to the derived set count: both define
    /// contiguous bitfields of the address and therefore must be exact
    /// powers of two.
    #[error("{field} must be a power of two (got {value})")]
    NotPowerOfTwo {
        /// Name of the offending field (possibly derived, e.g. `num_sets`).
        field: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// `size_bytes` is not an exact multiple of `ways * line_bytes`.
    #[error("size_bytes ({size_bytes}) is not a multiple of ways * line_bytes ({ways} * {line_bytes})")]
    SizeMismatch {
        /// Configured total cache size.
        size_bytes: usize,
        /// Configured associativity.
        ways: usize,
        /// Configured line size.
        line_bytes: usize,
    },

    /// The address width cannot hold the index and offset bitfields.
    #[error("address_bits ({address_bits}) is narrower than index_bits + offset_bits ({required})")]
    AddressWidthTooSmall {
        /// Configured address width in bits.
        address_bits: u32,
        /// Minimum width required by the derived geometry.
        required: u32,
    },

    /// The address width exceeds the 64-bit addresses the engine operates on.
    #[error("address_bits ({address_bits}) exceeds the supported maximum of 64")]
    AddressWidthTooWide {
        /// Configured address width in bits.
        address_bits: u32,
    },
}

/// Failures constructing a [`Cache`](crate::cache::Cache).
#[derive(Debug, Error)]
pub enum CacheError {
    /// The configuration violated a geometry invariant.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The backing memory cannot serve a single line fill.
    ///
    /// Line fills wrap around the backing buffer, so any length of at least
    /// one cache line is servable; anything shorter would read out of range.
    #[error("backing memory is {len} bytes; at least one cache line ({line_bytes} bytes) is required")]
    BackingTooSmall {
        /// Length of the supplied backing memory.
        len: usize,
        /// Configured line size.
        line_bytes: usize,
    },
}

/// Failures loading a backing-memory image from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The backing file could not be read.
    #[error("could not read backing file '{path}': {source}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
