//! Trait implementations for the palette and configuration crates

use paneboard_config::ConfigManager;
use paneboard_themes::ColorPalette;
use ratatui::style::Color;

use crate::traits::{ColorResolver, ConfigLookup};

impl ColorResolver for ColorPalette {
    fn resolve(&self, name: &str) -> Color {
        ColorPalette::resolve(self, name)
    }
}

impl ConfigLookup for ConfigManager {
    fn get_string(&self, key: &str, default: &str) -> String {
        ConfigManager::get_string(self, key, default)
    }
}
