//! Backing-memory loader.
//!
//! Reads a text or binary file from disk into the byte buffer the cache is
//! constructed over. The file's exact length is kept: the cache wraps fill
//! addresses modulo the buffer length, so no padding is applied.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// Loads a file from disk into a backing-memory buffer.
///
/// # Arguments
///
/// * `path` - Path to the backing file (any byte content).
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read.
pub fn load_backing<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "loaded backing memory");
    Ok(bytes)
}
