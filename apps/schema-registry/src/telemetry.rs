//! Logging setup.
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a
//! `fmt` layer in the configured format. `RUST_LOG`, when set, wins over the
//! configured level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Error type for logging setup.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Install the global subscriber described by `config`.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one stays in place.
///
/// # Errors
///
/// [`TelemetryError::InvalidFilter`] when `config.level` does not parse.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|source| {
            TelemetryError::InvalidFilter {
                directive: config.level.clone(),
                source,
            }
        })?,
    };

    let json = (config.format == "json").then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
    });
    let pretty = (config.format != "json").then(|| {
        let span_events = if config.include_spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_span_events(span_events)
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    }
    Ok(installed)
}
