//! Structured read traces.
//!
//! A [`ReadTrace`] records everything a single lookup decided: the address
//! decomposition, the hit or victim way, the per-way rank vector the victim
//! was chosen from, and where in backing memory a miss filled from. It is
//! the structured replacement for console-interleaved debug printing: the
//! engine stays testable without capturing text output.

use super::geometry::AddressParts;

/// Diagnostic record of a single `read`.
///
/// Returned by [`Cache::read_traced`](super::Cache::read_traced). Carries
/// the same byte `read` would return plus the full decomposition and
/// replacement decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTrace {
    /// The address as issued by the caller.
    pub address: u64,
    /// Tag/index/offset decomposition of the address.
    pub parts: AddressParts,
    /// The way that hit, or `None` on a miss.
    pub hit_way: Option<usize>,
    /// Per-way eviction ranks at the selected set, as scanned (hit ways
    /// contribute their just-updated metadata).
    pub ranks: Vec<u64>,
    /// The way selected for the line fill, or `None` on a hit.
    pub victim_way: Option<usize>,
    /// Line-aligned backing-memory offset the fill started from, or `None`
    /// on a hit.
    pub fill_start: Option<usize>,
    /// The byte returned to the caller.
    pub byte: u8,
}

impl ReadTrace {
    /// Whether this read hit in the cache.
    #[inline]
    pub const fn is_hit(&self) -> bool {
        self.hit_way.is_some()
    }
}
