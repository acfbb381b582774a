//! Builds the index file from the remote station list.

use tracing::info;

use crate::tfl::{ApiError, BikePointClient};

use super::entry::IndexEntry;
use super::error::IndexError;
use super::store::IndexStore;

/// Errors from [`build_index`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Store(#[from] IndexError),

    #[error("unable to download stations: {0}")]
    Fetch(#[from] ApiError),
}

/// Fetch every station and replace the index file with their projections.
///
/// The file is created before any request is made, so an unwritable path
/// fails without touching the network. Returns the number of entries written.
pub async fn build_index(
    client: &BikePointClient,
    store: &IndexStore,
) -> Result<usize, BuildError> {
    let writer = store.create()?;

    let stations = client.list_stations().await?;
    let entries: Vec<IndexEntry> = stations.iter().map(IndexEntry::from).collect();

    writer.write(&entries)?;

    info!(path = %store.path().display(), count = entries.len(), "index built");
    Ok(entries.len())
}
