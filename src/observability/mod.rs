//! Observability for the beer service
//!
//! Logging goes through `tracing`. The subscriber is installed once by the
//! `serve` command; HTTP requests are traced by `tower-http`.

mod subscriber;

pub use subscriber::{env_filter, init_tracing};
