//! Subscriber initialization

use crate::config::LoggingConfig;
use crate::utils::error::{AccessError, Result};
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AccessError::Config(format!("Invalid log filter: {}", e)))
}

/// Build a subscriber for `config` without installing it.
///
/// Output goes to stderr so generated SQL on stdout stays clean. The result can
/// be scoped with `tracing::dispatcher::with_default` or `WithSubscriber`.
pub fn logging_dispatch(config: &LoggingConfig) -> Result<Dispatch> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let dispatch = if config.json {
        Dispatch::new(builder.json().with_current_span(false).finish())
    } else {
        Dispatch::new(builder.finish())
    };

    Ok(dispatch)
}

/// Install the global tracing subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    logging_dispatch(config)?
        .try_init()
        .map_err(|e| AccessError::Config(format!("Failed to initialize logging: {}", e)))
}
