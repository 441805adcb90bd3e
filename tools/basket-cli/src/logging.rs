//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter: `RUST_LOG` wins, then `--verbose`, then the config level.
fn env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "debug"
    } else {
        config.level.as_str()
    };

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// parseable under `--json`.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let filter = env_filter(config, verbose);

    let installed = match config.format {
        LogFormat::Human => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    // `try_init` only fails when a global subscriber is already set; the
    // first one stays in charge.
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
