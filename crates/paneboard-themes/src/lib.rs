//! Paneboard color resolution
//!
//! Turns the color names found in configuration (`"gray"`, `"lightblue"`,
//! `"#ff8800"`, user aliases) into ratatui colors.

pub mod error;
pub mod palette;

pub use error::{Result, ThemeError};
pub use palette::ColorPalette;
