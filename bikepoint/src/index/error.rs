//! Index file error types.

use std::path::PathBuf;

/// Errors reading or writing the local index file.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The file could not be created, opened or written
    #[error("unable to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not a JSON array of index entries
    #[error("cannot decode index {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The entries could not be serialized
    #[error("unable to encode index {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}
