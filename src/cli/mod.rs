//! CLI module
//!
//! Provides the command-line interface:
//! - init: write default config, create data directory
//! - start: open the store and serve HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start};
pub use errors::{CliError, CliResult};
