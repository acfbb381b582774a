//! On-disk index file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::entry::IndexEntry;
use super::error::IndexError;

/// Default index location, relative to the working directory.
pub const DEFAULT_INDEX_PATH: &str = "index.json";

/// The index file: a single JSON array of [`IndexEntry`].
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the index file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create (or truncate) the index file and return a writer for it.
    ///
    /// The previous contents are gone as soon as this succeeds.
    pub fn create(&self) -> Result<IndexWriter, IndexError> {
        let file = File::create(&self.path).map_err(|source| IndexError::Io {
            action: "create",
            path: self.path.clone(),
            source,
        })?;

        Ok(IndexWriter {
            path: self.path.clone(),
            out: BufWriter::new(file),
        })
    }

    /// Load all entries, in file order.
    pub fn load(&self) -> Result<Vec<IndexEntry>, IndexError> {
        let file = File::open(&self.path).map_err(|source| IndexError::Io {
            action: "open",
            path: self.path.clone(),
            source,
        })?;

        let entries: Vec<IndexEntry> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                IndexError::Decode {
                    path: self.path.clone(),
                    source,
                }
            })?;

        debug!(path = %self.path.display(), count = entries.len(), "loaded index");
        Ok(entries)
    }
}

impl Default for IndexStore {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_PATH)
    }
}

/// Handle to a freshly truncated index file.
#[derive(Debug)]
pub struct IndexWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl IndexWriter {
    /// Write `entries` as one JSON array followed by a newline.
    pub fn write(mut self, entries: &[IndexEntry]) -> Result<(), IndexError> {
        serde_json::to_writer(&mut self.out, entries).map_err(|source| {
            if source.is_io() {
                IndexError::Io {
                    action: "write",
                    path: self.path.clone(),
                    source: source.into(),
                }
            } else {
                IndexError::Encode {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        self.out
            .write_all(b"\n")
            .and_then(|()| self.out.flush())
            .map_err(|source| IndexError::Io {
                action: "write",
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = entries.len(), "wrote index");
        Ok(())
    }
}
