//! Command-line front end.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::commands::{self, CommandError};
use crate::index::{DEFAULT_INDEX_PATH, IndexStore};
use crate::tfl::{BikePointClient, ClientConfig, DEFAULT_BASE_URL};

/// Search and inspect London cycle hire docking stations.
#[derive(Debug, Parser)]
#[command(name = "bikepoint", version, about)]
#[command(allow_external_subcommands = true)]
pub struct Cli {
    /// Path of the local station index
    #[arg(long, global = true, env = "BIKEPOINT_INDEX", default_value = DEFAULT_INDEX_PATH)]
    pub index: PathBuf,

    /// Base URL of the TfL API
    #[arg(long, global = true, env = "BIKEPOINT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for each API request, in seconds
    #[arg(
        long,
        global = true,
        env = "BIKEPOINT_TIMEOUT_SECS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Download every station and rebuild the local index
    Init,

    /// List indexed stations whose name contains every term
    Find {
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        terms: Vec<String>,
    },

    /// Print the current occupancy of one station as JSON
    Show { id: String },

    /// Anything else is accepted and ignored
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Process exit status for arguments that did not parse.
///
/// Help and version output are successes; every other parse error is a
/// failure reported with status 1.
pub fn exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

impl Cli {
    /// Run the selected command. No command, or an unknown one, does nothing.
    pub async fn run(self) -> Result<(), CommandError> {
        let Cli {
            index,
            base_url,
            timeout_secs,
            command,
        } = self;

        let Some(command) = command else {
            debug!("no command given");
            return Ok(());
        };

        let store = IndexStore::new(index);
        let config = ClientConfig::new()
            .with_base_url(base_url)
            .with_timeout(timeout_secs);

        match command {
            Command::Init => {
                let client = BikePointClient::new(config).map_err(CommandError::Client)?;
                commands::init(&client, &store).await?;
            }
            Command::Find { terms } => {
                commands::find(&store, &terms, &mut io::stdout())?;
            }
            Command::Show { id } => {
                let client = BikePointClient::new(config).map_err(CommandError::Client)?;
                commands::show(&client, &id, &mut io::stdout()).await?;
            }
            Command::Other(args) => {
                debug!(?args, "ignoring unrecognized command");
            }
        }

        Ok(())
    }
}
