//! CLI module for the beer service
//!
//! Provides command-line interface for:
//! - serve: Load config, seed the store and serve HTTP until Ctrl-C
//! - routes: Print the route table, or the route one request resolves to

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, run, run_command, serve, write_match, write_routes};
pub use errors::{CliError, CliResult};
