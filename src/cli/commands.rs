//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chirpy")]
#[command(about = "Store short text records in a JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database file (overrides chirpy.toml and CHIRPY_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file (default: ./chirpy.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database file if it doesn't exist
    Init {
        /// Database file to initialize (default: configured database)
        path: Option<PathBuf>,
    },

    /// Add a chirp
    Create {
        /// Text of the chirp
        body: String,
    },

    /// List chirps in id order
    List {
        /// Show at most this many chirps
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single chirp
    Show {
        /// Chirp id
        id: u64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
