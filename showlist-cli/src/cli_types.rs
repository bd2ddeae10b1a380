//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "showlist")]
#[command(about = "Merge, enrich, and normalize streaming catalog listings", long_about = None)]
pub(crate) struct Cli {
    /// Data directory (defaults to the saved setting, then ./data)
    #[arg(short, long, global = true)]
    pub data_root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch all sources, then build every artifact
    Run {
        /// Use the CSV files already in the extraction directory
        #[arg(long)]
        skip_fetch: bool,
    },

    /// Download the source archives and extract their titles CSV
    Fetch {
        /// Only fetch this platform (see `showlist sources`)
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// Build enriched and normalized artifacts from the extracted CSV files
    Process,

    /// List the known catalog sources
    Sources,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings and resolved data directory
    Show,

    /// Print the settings file path
    Path,

    /// Save a default data directory
    SetDataRoot {
        /// Directory to use when --data-root is not given
        path: PathBuf,
    },

    /// Remove the saved data directory
    ClearDataRoot,
}
