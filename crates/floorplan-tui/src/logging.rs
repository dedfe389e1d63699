//! Tracing subscriber setup.
//!
//! The terminal is in the alternate screen while the app runs, so logs go to
//! a file instead of stderr.

use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::TerminalError;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "floorplan_app=debug,floorplan_tui=info";

/// Install a global subscriber writing to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a subscriber is
/// already installed.
pub fn init(path: &Path) -> Result<(), TerminalError> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TerminalError::Logging(e.to_string()))
}
