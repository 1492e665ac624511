//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,llm_tour=info";

/// Install a fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Logs go to stderr so
/// they never interleave with the walkthrough printed on stdout.
///
/// # Errors
///
/// Returns `Error::Config` if the filter does not parse or a global
/// subscriber is already installed.
pub fn setup_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| Error::Config(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {e}")))
}
