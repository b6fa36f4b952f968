//! Simulation collaborators around the cache engine.
//!
//! The engine itself only consumes a byte buffer and serves `read` calls;
//! this module supplies the two external collaborators: a loader that reads
//! a file into the backing buffer, and a runner that replays an address
//! sequence and collects the results.

/// Backing-memory file loader.
pub mod loader;

/// Address-sequence driver.
pub mod runner;

pub use runner::{ReadRecord, Runner};
