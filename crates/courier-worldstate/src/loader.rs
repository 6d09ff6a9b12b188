//! World-state file loading.
//!
//! The only I/O in the system. Everything downstream of this function is a
//! pure computation over the records it returns.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::WorldStateNode;

/// Load a world-state JSON document (an array of node records) from disk.
pub fn load_pool(path: impl AsRef<Path>) -> Result<Vec<WorldStateNode>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<WorldStateNode> =
        serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("loaded {} world-state records from {}", records.len(), path.display());
    Ok(records)
}
