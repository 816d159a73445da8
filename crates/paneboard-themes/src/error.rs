//! Error types for color resolution

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Invalid color for alias {alias}: {value}")]
    InvalidColor { alias: String, value: String },

    #[error("Alias name cannot be empty")]
    EmptyAlias,
}

pub type Result<T> = std::result::Result<T, ThemeError>;
