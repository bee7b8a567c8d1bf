//! Tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LoggingConfig;
use crate::error::AppError;

/// Install the global subscriber: `EnvFilter` from the configured directive
/// plus a plain or JSON `fmt` layer.
///
/// Fails with [`AppError::Config`] on a bad directive or when a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AppError::Config(format!("Invalid log directive {:?}: {}", config.level, e)))?;

    let registry = Registry::default().with(filter);
    let result = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    result.map_err(|e| AppError::Config(format!("Tracing already initialised: {}", e)))
}
