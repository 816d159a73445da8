//! Paneboard configuration
//!
//! Loads dashboard settings from an optional config file and `PANEBOARD_*`
//! environment variables, and answers dotted-key lookups with defaults.

pub mod error;
pub mod manager;
pub mod types;

pub use config::FileFormat;
pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    BorderColors, ColorsConfig, ConfigManager as ConfigManagerTrait, DashboardConfig,
    WidgetConfig,
};
