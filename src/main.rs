//! beer-service entry point
//!
//! Parses arguments, runs the selected command and exits non-zero on failure.
//! All logic lives in the CLI module.

use beer_service::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
