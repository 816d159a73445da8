//! Tracing subscriber setup

use tracing::Level;

use crate::error::{TuiError, TuiResult};

/// Install a stderr fmt subscriber.
///
/// The terminal itself belongs to the dashboard, so logs go to stderr.
/// Fails if a global subscriber is already installed.
pub fn init_logging(level: Level) -> TuiResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| TuiError::Logging {
            message: e.to_string(),
        })
}
