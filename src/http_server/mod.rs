//! # Beer HTTP Server Module
//!
//! Exposes the beer service over HTTP with axum.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/v3/beer[?beerStyle=]` - List beers
//! - `POST /api/v3/beer` - Create a beer
//! - `GET|PUT|PATCH|DELETE /api/v3/beer/{id}` - Single beer

pub mod beer_handlers;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use routes::{resolve, Endpoint, Route, RouteMatch, BEER_PATH, BEER_PATH_ID, BEER_ROUTES};
pub use server::{build_router, HttpServer};
