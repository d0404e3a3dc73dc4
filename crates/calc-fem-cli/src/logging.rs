//! Log subscriber setup
//!
//! `RUST_LOG` takes precedence; otherwise the verbosity flags pick the
//! level. Logs always go to stderr so stdout stays parseable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the filter for a verbosity level
pub fn env_filter(verbosity: Verbosity) -> CliResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity.default_filter()))
        .map_err(|e| CliError::config(format!("invalid log filter: {e}")))
}

/// Installs the global subscriber
pub fn init_logging(verbosity: Verbosity) -> CliResult<()> {
    let filter = env_filter(verbosity)?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .map_err(|e| CliError::config(format!("logging already initialized: {e}")))
}
