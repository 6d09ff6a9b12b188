//! Error types for world-state handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for world-state operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or interpreting world state.
#[derive(Debug, Error)]
pub enum Error {
    /// An enode address string does not have the expected
    /// `enode://gid@ip:port` structure.
    #[error("malformed enode address {address:?}: {reason}")]
    MalformedEnode {
        address: String,
        reason: &'static str,
    },

    /// The world-state document could not be read.
    #[error("world-state file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The world-state document is not valid JSON of the expected shape.
    #[error("world-state file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
