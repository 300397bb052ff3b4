//! Diagnostic output setup.
//!
//! Rejected constructions and edits are reported as `tracing` events. Nothing
//! is printed until a subscriber is installed, either by the embedding
//! application or through [`init`].

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt, prelude::*};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Build the filter for `config`.
///
/// `RUST_LOG` directives are honored; the configured filter is added on top.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directive = config
        .filter
        .parse::<Directive>()
        .map_err(|e| Error::logging(format!("invalid filter '{}': {}", config.filter, e)))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Build the `fmt` subscriber configured by `config` without installing it.
pub fn subscriber(config: &LoggingConfig) -> Result<impl Subscriber + Send + Sync + 'static> {
    let filter = env_filter(config)?;

    Ok(tracing_subscriber::registry()
        .with(fmt::layer().with_target(config.with_target))
        .with(filter))
}

/// Install the subscriber from [`subscriber`] globally.
///
/// Fails if the filter is malformed or a global subscriber already exists.
pub fn init(config: &LoggingConfig) -> Result<()> {
    subscriber(config)?
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))
}
