//! CLI module for clinicdb
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - start: Open the record store and serve HTTP

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
