//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("BEER_CLI_CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    /// Sample data could not be written
    #[error("BEER_CLI_SEED_FAILED: {0}")]
    Seed(#[from] StoreError),

    /// Binding or serving failed
    #[error("BEER_CLI_SERVE_FAILED: {0}")]
    Serve(#[from] io::Error),

    /// `routes --match` was given something that is not an HTTP method
    #[error("BEER_CLI_INVALID_METHOD: {0}")]
    InvalidMethod(String),

    /// `routes --match` found no route for the request
    #[error("BEER_CLI_NO_ROUTE: {method} {path}")]
    NoRoute { method: String, path: String },
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
