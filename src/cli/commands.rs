//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - analyze: aggregate order statistics for a log directory
//! - events: dump the classified event sequence of one log file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// barlog - reliability statistics from dispensing-device logs
#[derive(Parser, Debug)]
#[command(name = "barlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze every log file under a directory
    Analyze {
        /// Root directory to scan for log files
        root: PathBuf,

        /// Write the per-file stats table to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the classified event sequence of one log file
    Events {
        /// Log file to inspect
        file: PathBuf,
    },
}
