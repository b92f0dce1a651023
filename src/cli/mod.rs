//! CLI module for inventario
//!
//! Provides:
//! - menu: interactive text menu over the inventory (default)
//! - list: one-shot listing of the inventory file
//! - search: one-shot name search in the inventory file

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod render;

pub use args::{Cli, Command};
pub use commands::{list, menu, run, run_command, search, Flow, Session};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{Console, Input};
