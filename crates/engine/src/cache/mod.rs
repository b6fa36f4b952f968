//! Set-Associative Cache store.
//!
//! This module implements the cache lookup/replacement engine. It holds
//! per-way, per-set lines (validity, tag, data bytes, policy metadata) in
//! front of an immutable backing memory, and serves `read(address)` by
//! scanning the selected set for a tag match, or on a miss selecting a
//! victim via the replacement policy and filling the line from backing
//! memory. The backing address space is circular: fill sources wrap modulo
//! the backing length.

/// Address geometry: tag/index/offset decomposition and masks.
pub mod geometry;

/// Cache replacement policy implementations (LRU, LFU).
pub mod policies;

/// Structured per-read diagnostic traces.
pub mod trace;

pub use geometry::{AddressParts, Geometry};
pub use trace::ReadTrace;

use std::fmt;

use tracing::trace;

use self::policies::{LfuPolicy, LruPolicy, ReplacementPolicy};
use crate::config::{CacheConfig, ReplacementPolicy as PolicyType};
use crate::error::CacheError;
use crate::stats::CacheStats;

/// One cache line slot: validity, tag, policy metadata, and data bytes.
///
/// Created invalid and zeroed at construction; mutated only by `read` (a
/// metadata touch on hit, a full overwrite on fill). Once valid, a slot
/// stays valid for the life of the cache — eviction overwrites in place.
#[derive(Clone, Debug)]
struct CacheLine {
    valid: bool,
    tag: u64,
    meta: u64,
    data: Box<[u8]>,
}

impl CacheLine {
    fn empty(line_bytes: usize) -> Self {
        Self {
            valid: false,
            tag: 0,
            meta: 0,
            data: vec![0; line_bytes].into_boxed_slice(),
        }
    }
}

/// Set-associative cache in front of a flat byte-addressable memory image.
///
/// Holds a read-only copy of the backing memory for its lifetime and serves
/// byte reads through the lookup/fill path. Single-threaded: every `read`
/// completes synchronously and is the only mutation path into the store.
pub struct Cache {
    geometry: Geometry,
    /// Flat line storage, indexed `set * ways + way`.
    lines: Vec<CacheLine>,
    policy: Box<dyn ReplacementPolicy>,
    /// Monotonic per-read counter; the LRU recency source. Advances on every
    /// read under either policy. Starts at 1 so a line filled on the very
    /// first read never ties with the zero metadata of never-used ways.
    clock: u64,
    memory: Vec<u8>,
    stats: CacheStats,
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("geometry", &self.geometry)
            .field("clock", &self.clock)
            .field("memory_len", &self.memory.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Cache {
    /// Creates a cache over the given backing memory.
    ///
    /// All lines start invalid with zeroed tags, metadata, and data. The
    /// backing memory is treated as a circular address space: fill sources
    /// wrap modulo its length, which need not be a multiple of the cache or
    /// line size.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache geometry and replacement policy.
    /// * `memory` - Backing memory image; never mutated by the cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Config`] when the configuration violates a
    /// geometry invariant, or [`CacheError::BackingTooSmall`] when the
    /// backing memory is shorter than one cache line.
    pub fn new(config: &CacheConfig, memory: Vec<u8>) -> Result<Self, CacheError> {
        let geometry = Geometry::new(config)?;
        if memory.len() < geometry.line_bytes() {
            return Err(CacheError::BackingTooSmall {
                len: memory.len(),
                line_bytes: geometry.line_bytes(),
            });
        }

        let policy: Box<dyn ReplacementPolicy> = match config.policy {
            PolicyType::Lru => Box::new(LruPolicy),
            PolicyType::Lfu => Box::new(LfuPolicy),
        };

        let lines = (0..geometry.sets() * geometry.ways())
            .map(|_| CacheLine::empty(geometry.line_bytes()))
            .collect();

        Ok(Self {
            geometry,
            lines,
            policy,
            clock: 1,
            memory,
            stats: CacheStats::default(),
        })
    }

    /// Reads one byte through the cache.
    ///
    /// Decomposes the address, scans every way of the selected set for a
    /// valid tag match, and on a miss fills the victim line from backing
    /// memory before returning the byte. Infallible: malformed geometry and
    /// undersized backing memory are rejected at construction.
    pub fn read(&mut self, address: u64) -> u8 {
        self.access(address).byte
    }

    /// Reads one byte, returning the full diagnostic trace of the lookup.
    ///
    /// Functionally identical to [`Cache::read`] — both run the same access
    /// path — but additionally reports the address decomposition, hit/miss
    /// decision, per-way ranks, and victim selection.
    pub fn read_traced(&mut self, address: u64) -> ReadTrace {
        self.access(address)
    }

    /// The single lookup/fill path shared by `read` and `read_traced`.
    fn access(&mut self, address: u64) -> ReadTrace {
        let parts = self.geometry.decompose(address);
        let set = parts.index as usize;
        let offset = parts.offset as usize;
        let ways = self.geometry.ways();
        let base = set * ways;

        let mut ranks = Vec::with_capacity(ways);
        let mut hit_way = None;
        let mut byte = 0u8;

        // One pass does both jobs: find a valid tag match and snapshot every
        // way's eviction rank. A hit way contributes its just-touched
        // metadata; untouched ways keep their prior value, so never-filled
        // ways rank 0 and win victim selection before anything is evicted.
        for way in 0..ways {
            let line = &mut self.lines[base + way];
            if line.valid && line.tag == parts.tag {
                line.meta = self.policy.touch(line.meta, self.clock);
                byte = line.data[offset];
                hit_way = Some(way);
            }
            ranks.push(self.policy.rank(line.meta));
        }

        let mut victim_way = None;
        let mut fill_start = None;
        if let Some(way) = hit_way {
            trace!(
                address,
                tag = parts.tag,
                index = parts.index,
                way,
                "cache hit"
            );
        } else {
            // Lowest rank loses; ties break toward the lowest way number.
            let victim = ranks
                .iter()
                .enumerate()
                .min_by_key(|&(_, rank)| rank)
                .map_or(0, |(way, _)| way);
            let line_bytes = self.geometry.line_bytes();
            let start =
                ((address % self.memory.len() as u64) as usize / line_bytes) * line_bytes;

            self.fill_line(base + victim, parts.tag, start);
            byte = self.lines[base + victim].data[offset];
            victim_way = Some(victim);
            fill_start = Some(start);
            trace!(
                address,
                tag = parts.tag,
                index = parts.index,
                victim,
                fill_start = start,
                "cache miss"
            );
        }

        self.stats.record(hit_way.is_some());
        self.clock += 1;

        ReadTrace {
            address,
            parts,
            hit_way,
            ranks,
            victim_way,
            fill_start,
            byte,
        }
    }

    /// Overwrites the line at `slot` with the cacheline starting at backing
    /// offset `start`.
    fn fill_line(&mut self, slot: usize, tag: u64, start: usize) {
        let line_bytes = self.geometry.line_bytes();
        let line = &mut self.lines[slot];
        line.valid = true;
        line.tag = tag;
        line.meta = self.policy.fill(self.clock);

        let end = start + line_bytes;
        if end <= self.memory.len() {
            line.data.copy_from_slice(&self.memory[start..end]);
        } else {
            // Backing length is not a line multiple; the circular address
            // space wraps the tail back to the start of the buffer.
            let head = self.memory.len() - start;
            line.data[..head].copy_from_slice(&self.memory[start..]);
            line.data[head..].copy_from_slice(&self.memory[..line_bytes - head]);
        }
    }

    /// Derived geometry (widths, masks, set/way counts).
    #[inline]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Read/hit/miss statistics accumulated so far.
    #[inline]
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Current logical clock (starts at 1, advances once per read).
    #[inline]
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Total cache size in bytes.
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        self.geometry.size_bytes()
    }

    /// Associativity (number of ways per set).
    #[inline]
    pub const fn ways(&self) -> usize {
        self.geometry.ways()
    }

    /// Number of sets.
    #[inline]
    pub const fn sets(&self) -> usize {
        self.geometry.sets()
    }

    /// Cache line size in bytes.
    #[inline]
    pub const fn line_bytes(&self) -> usize {
        self.geometry.line_bytes()
    }
}
