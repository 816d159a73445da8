//! Error types for the terminal surface

use paneboard_config::ConfigError;
use paneboard_themes::ThemeError;
use thiserror::Error;

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;

/// Main error type for TUI operations
#[derive(Error, Debug)]
pub enum TuiError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Palette errors
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    /// Subscriber installation errors
    #[error("Logging error: {message}")]
    Logging { message: String },
}
