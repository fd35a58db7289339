//! CLI argument definitions using clap
//!
//! Commands:
//! - beer-service serve [--config <path>] [--port <n>] [--no-seed]
//! - beer-service routes [--match <METHOD> <PATH>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Beer Service - HTTP resource service for the beer catalogue
#[derive(Parser, Debug)]
#[command(name = "beer-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Do not load the sample catalogue
        #[arg(long)]
        no_seed: bool,
    },

    /// Print the route table and exit
    Routes {
        /// Show only the route a request would be dispatched to
        #[arg(long = "match", num_args = 2, value_names = ["METHOD", "PATH"])]
        request: Option<Vec<String>>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
