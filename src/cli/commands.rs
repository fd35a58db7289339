//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use axum::http::Method;
use tracing::info;

use crate::config::ServiceConfig;
use crate::http_server::{resolve, HttpServer, BEER_ROUTES};
use crate::observability::init_tracing;
use crate::store::{seed_sample_beers, BeerStore, InMemoryBeerStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub async fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command).await
}

/// Run an already-parsed command.
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            port,
            no_seed,
        } => {
            let config = resolve_config(config.as_deref(), port, no_seed)?;
            serve(config).await
        }
        Command::Routes { request: None } => {
            write_routes(&mut io::stdout().lock())?;
            Ok(())
        }
        Command::Routes {
            request: Some(request),
        } => match request.as_slice() {
            [method, path] => write_match(&mut io::stdout().lock(), method, path),
            // clap enforces exactly two values
            _ => Ok(()),
        },
    }
}

/// Load the config file and apply command-line overrides.
pub fn resolve_config(
    path: Option<&Path>,
    port: Option<u16>,
    no_seed: bool,
) -> CliResult<ServiceConfig> {
    let mut config = ServiceConfig::load_or_default(path)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if no_seed {
        config.seed_sample_data = false;
    }
    Ok(config)
}

/// Start the service with an in-memory store.
pub async fn serve(config: ServiceConfig) -> CliResult<()> {
    init_tracing(&config.log);

    let store: Arc<dyn BeerStore> = Arc::new(InMemoryBeerStore::new());
    if config.seed_sample_data {
        seed_sample_beers(store.as_ref()).await?;
    } else {
        info!("sample data disabled");
    }

    HttpServer::new(config.server, store).start().await?;
    Ok(())
}

/// Print one line per route: method, path, query parameter, endpoint.
pub fn write_routes<W: Write>(out: &mut W) -> io::Result<()> {
    for route in BEER_ROUTES {
        writeln!(
            out,
            "{:<7} {:<20} {:<10} {}",
            route.method.to_string(),
            route.path,
            route.query.unwrap_or("-"),
            route.endpoint.name()
        )?;
    }
    Ok(())
}

/// Print the route a request would be dispatched to, and its captured id.
///
/// The method is case-insensitive. A query string on `path` is ignored.
pub fn write_match<W: Write>(out: &mut W, method: &str, path: &str) -> CliResult<()> {
    let parsed = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| CliError::InvalidMethod(method.to_string()))?;
    let path = path.split_once('?').map_or(path, |(path, _)| path);

    let matched = resolve(&parsed, path).ok_or_else(|| CliError::NoRoute {
        method: parsed.to_string(),
        path: path.to_string(),
    })?;

    writeln!(
        out,
        "{} {} -> {} (id: {})",
        matched.route.method,
        matched.route.path,
        matched.route.endpoint.name(),
        matched.id.as_deref().unwrap_or("-")
    )?;
    Ok(())
}
