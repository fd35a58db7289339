//! # HTTP Server
//!
//! Combines the beer routes and the health route into one axum router and
//! serves it until Ctrl-C.

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::service::BeerService;
use crate::store::BeerStore;

use super::beer_handlers::BeerState;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::routes::{beer_routes, BEER_ROUTES};

/// HTTP server for the beer service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store
    pub fn new(config: HttpServerConfig, store: Arc<dyn BeerStore>) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr = self
            .config
            .socket_addr()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "beer service listening");
        for route in BEER_ROUTES {
            info!(method = %route.method, path = route.path, "route");
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("beer service stopped");
        Ok(())
    }
}

/// Build the full application router
pub fn build_router(config: &HttpServerConfig, store: Arc<dyn BeerStore>) -> Router {
    let state = Arc::new(BeerState::new(BeerService::new(store)));

    Router::new()
        .merge(health_routes())
        .merge(beer_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!(origin = %s, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
