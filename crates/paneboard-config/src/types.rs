//! Core configuration types and data structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Color settings
    pub colors: ColorsConfig,
    /// Widgets, in focus order
    pub widgets: Vec<WidgetConfig>,
}

/// Color settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ColorsConfig {
    /// Border colors
    pub border: BorderColors,
    /// User-defined color names
    pub palette: BTreeMap<String, String>,
}

/// Border color names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BorderColors {
    /// Border of the focused widget
    pub focused: String,
    /// Border of every other widget
    pub normal: String,
}

impl Default for BorderColors {
    fn default() -> Self {
        Self {
            focused: "gray".to_string(),
            normal: "gray".to_string(),
        }
    }
}

/// A single text widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetConfig {
    /// Unique widget name
    pub name: String,
    /// Border title, defaults to the name
    #[serde(default)]
    pub title: Option<String>,
    /// Whether focus cycling may land on this widget
    #[serde(default = "default_focusable")]
    pub focusable: bool,
    /// Unfocused border color name, defaults to `colors.border.normal`
    #[serde(default)]
    pub border_color: Option<String>,
    /// Initial text content
    #[serde(default)]
    pub text: Option<String>,
}

fn default_focusable() -> bool {
    true
}

impl WidgetConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            focusable: default_focusable(),
            border_color: None,
            text: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    /// Title shown on the border
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration from all sources
    fn load_config(&mut self) -> Result<DashboardConfig, crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &DashboardConfig) -> Result<(), crate::error::ConfigError>;
}
