use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

/// `RUST_LOG` when set, else the configured directive, else `info`.
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn init(config: &AppConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .with_line_number(true)
        .try_init();
    if let Err(err) = result {
        eprintln!("Warning: could not initialize logging: {err}");
    }
}
