use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// `RUST_LOG` if set, else `DEFAULT_LOG_FILTER`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the fmt subscriber.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .init();
}
