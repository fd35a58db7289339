//! Tracing subscriber installation

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Build the filter: `RUST_LOG` wins, then the configured directive, then `info`.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns `false` if one was already installed (tests, embedding).
pub fn init_tracing(config: &LogConfig) -> bool {
    let builder = fmt().with_env_filter(env_filter(config)).with_target(true);

    let result = if config.json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };

    result.is_ok()
}
