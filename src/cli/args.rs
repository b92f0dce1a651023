//! CLI argument definitions using clap
//!
//! Commands:
//! - inventario [menu]
//! - inventario list
//! - inventario search <term>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inventario - a single-user inventory ledger
#[derive(Parser, Debug)]
#[command(name = "inventario")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Inventory file to read and write (overrides the configuration)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Minimum log level written to stderr: trace, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,

    /// Print every product and exit
    List,

    /// Print products whose name contains TERM and exit
    Search {
        /// Case-insensitive substring to look for
        term: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The selected command, defaulting to the interactive menu
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }
}
