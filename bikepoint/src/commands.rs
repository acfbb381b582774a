//! Bodies of the `init`, `find` and `show` commands.
//!
//! Output goes to the supplied writer so the binary can hand in stdout and
//! tests can hand in a buffer.

use std::io::Write;

use chrono::Utc;

use crate::index::{BuildError, IndexError, IndexStore, build_index, search};
use crate::snapshot::Snapshot;
use crate::tfl::{ApiError, BikePointClient};

/// A failed command, with context for the user.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("missing find param")]
    MissingTerms,

    #[error("cannot create client: {0}")]
    Client(#[source] ApiError),

    #[error("failed to build index: {0}")]
    Init(#[from] BuildError),

    #[error("failed to load index: {0}")]
    Find(#[from] IndexError),

    #[error("unable to view docking info: {0}")]
    Show(#[from] ApiError),

    #[error("unable to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Rebuild the index file from the remote station list.
pub async fn init(client: &BikePointClient, store: &IndexStore) -> Result<usize, CommandError> {
    Ok(build_index(client, store).await?)
}

/// Print every indexed station whose name contains all `terms`.
///
/// Writes a `Search "..."...` line first, then `name url` per match.
/// Returns the number of matches.
pub fn find<W: Write>(
    store: &IndexStore,
    terms: &[String],
    out: &mut W,
) -> Result<usize, CommandError> {
    if terms.is_empty() {
        return Err(CommandError::MissingTerms);
    }

    let index = store.load()?;

    writeln!(out, "Search {:?}...", terms.join(" "))?;
    let found = search(&index, terms);
    for entry in &found {
        writeln!(out, "{} {}", entry.common_name, entry.url)?;
    }

    Ok(found.len())
}

/// Fetch one station and print its snapshot as a JSON object.
pub async fn show<W: Write>(
    client: &BikePointClient,
    id: &str,
    out: &mut W,
) -> Result<Snapshot, CommandError> {
    let station = client.get_station(id).await?;
    let snap = Snapshot::from_station(&station, Utc::now());

    serde_json::to_writer(&mut *out, &snap)?;
    writeln!(out)?;

    Ok(snap)
}
