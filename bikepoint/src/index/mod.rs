//! Local station index.
//!
//! `init` flattens the full station list into [`IndexEntry`] records and
//! writes them to a single JSON file; `find` reads that file back and
//! matches names against search terms. The file is only ever replaced
//! wholesale.

mod builder;
mod entry;
mod error;
mod search;
mod store;

pub use builder::{BuildError, build_index};
pub use entry::IndexEntry;
pub use error::IndexError;
pub use search::search;
pub use store::{DEFAULT_INDEX_PATH, IndexStore, IndexWriter};
