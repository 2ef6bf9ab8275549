//! CLI module for the planet catalog
//!
//! Provides the command-line interface:
//! - serve: start the catalog HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliResult};
