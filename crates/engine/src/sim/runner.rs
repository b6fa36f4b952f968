//! Runner: drives an address sequence through a cache.
//!
//! A thin demo driver that owns the cache, replays addresses in order, and
//! records each returned byte together with its hit/miss outcome. Useful
//! for replacement-policy studies and as the engine behind the CLI.

use crate::cache::Cache;
use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::stats::CacheStats;

/// Outcome of one driven read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRecord {
    /// The address issued.
    pub address: u64,
    /// The byte returned.
    pub byte: u8,
    /// Whether the read hit in the cache.
    pub hit: bool,
}

/// Address-sequence driver owning a [`Cache`].
#[derive(Debug)]
pub struct Runner {
    cache: Cache,
}

impl Runner {
    /// Creates a runner with a fresh cache over the given backing memory.
    ///
    /// # Errors
    ///
    /// Propagates [`CacheError`] from cache construction.
    pub fn new(config: &CacheConfig, memory: Vec<u8>) -> Result<Self, CacheError> {
        Ok(Self {
            cache: Cache::new(config, memory)?,
        })
    }

    /// Replays `addresses` in order, returning one record per read.
    pub fn run<I>(&mut self, addresses: I) -> Vec<ReadRecord>
    where
        I: IntoIterator<Item = u64>,
    {
        addresses
            .into_iter()
            .map(|address| {
                let outcome = self.cache.read_traced(address);
                ReadRecord {
                    address,
                    byte: outcome.byte,
                    hit: outcome.is_hit(),
                }
            })
            .collect()
    }

    /// The cache being driven.
    #[inline]
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Mutable access to the cache, for interleaving direct reads.
    #[inline]
    pub fn cache_mut(&mut self) -> &mut Cache {
        &mut self.cache
    }

    /// Accumulated statistics across everything driven so far.
    #[inline]
    pub const fn stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}
