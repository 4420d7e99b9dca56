//! CLI argument definitions using clap
//!
//! Commands:
//! - clinicdb init --config <path>
//! - clinicdb start --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clinicdb - patient and encounter records over HTTP
#[derive(Parser, Debug)]
#[command(name = "clinicdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./clinicdb.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./clinicdb.json")]
        config: PathBuf,

        /// Overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
