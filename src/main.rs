//! inventario CLI entry point
//!
//! Parses arguments and hands off to the CLI module. Only startup failures
//! (bad arguments or configuration) exit non-zero.

use inventario::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
