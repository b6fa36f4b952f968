//! Statistics Tests.
//!
//! Verifies counter accounting and the derived hit rate.

use cachesim_core::cache::Cache;
use cachesim_core::config::CacheConfig;
use cachesim_core::stats::CacheStats;

#[test]
fn default_stats_are_zero() {
    let stats = CacheStats::default();
    assert_eq!(stats.reads, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert!((stats.hit_rate() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn hit_rate_is_hits_over_reads() {
    let memory = vec![0u8; 256];
    let mut cache = Cache::new(&CacheConfig::default(), memory).unwrap();

    let _ = cache.read(0); // miss
    let _ = cache.read(0); // hit
    let _ = cache.read(1); // hit
    let _ = cache.read(2); // hit

    let stats = cache.stats();
    assert_eq!(stats.reads, 4);
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn display_summarizes_counters() {
    let memory = vec![0u8; 256];
    let mut cache = Cache::new(&CacheConfig::default(), memory).unwrap();
    let _ = cache.read(0);
    let _ = cache.read(0);

    let summary = cache.stats().to_string();
    assert_eq!(summary, "reads: 2, hits: 1, misses: 1, hit rate: 50.00%");
}
