//! CLI argument definitions using clap
//!
//! Commands:
//! - stringvault init --config <path>
//! - stringvault start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// StringVault - a content-addressed string analysis and retrieval service
#[derive(Parser, Debug)]
#[command(name = "stringvault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file and create the data directory
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./stringvault.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./stringvault.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
