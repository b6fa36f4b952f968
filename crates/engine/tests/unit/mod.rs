//! # Unit Components
//!
//! This module aggregates the unit tests for the cache engine: the
//! set-associative store and its geometry and policies, the configuration
//! layer, the simulation collaborators, and statistics accounting.

/// Unit tests for the set-associative store, geometry, and policies.
pub mod cache;



/// Unit tests for read/hit/miss statistics.
pub mod stats;
