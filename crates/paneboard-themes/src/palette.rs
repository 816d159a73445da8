//! Named color palette
//!
//! Names resolve in this order:
//! 1. aliases registered on the palette
//! 2. the sixteen W3C names used by terminal toolkits (`maroon`, `navy`,
//!    `silver`, ...) mapped onto the ANSI colors
//! 3. anything [`Color::from_str`] accepts (`darkgray`, `lightblue`, `42`,
//!    `#ff8800`)
//!
//! [`ColorPalette::resolve`] falls back to a fixed color for everything else.

use std::{collections::HashMap, str::FromStr};

use ratatui::style::Color;

use crate::error::{Result, ThemeError};

/// W3C color names in ANSI order. `gray` is ANSI 8, `silver` ANSI 7.
const ANSI_NAMES: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("maroon", Color::Red),
    ("green", Color::Green),
    ("olive", Color::Yellow),
    ("navy", Color::Blue),
    ("purple", Color::Magenta),
    ("teal", Color::Cyan),
    ("silver", Color::Gray),
    ("gray", Color::DarkGray),
    ("grey", Color::DarkGray),
    ("red", Color::LightRed),
    ("lime", Color::LightGreen),
    ("yellow", Color::LightYellow),
    ("blue", Color::LightBlue),
    ("fuchsia", Color::LightMagenta),
    ("aqua", Color::LightCyan),
    ("white", Color::White),
];

/// Resolves color names to ratatui colors
#[derive(Debug, Clone)]
pub struct ColorPalette {
    aliases: HashMap<String, Color>,
    fallback: Color,
}

impl ColorPalette {
    /// Create a palette with no aliases that falls back to the terminal default
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
            fallback: Color::Reset,
        }
    }

    /// Build a palette from `alias -> color` pairs, typically a config table
    pub fn from_aliases<I, K, V>(aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut palette = Self::new();
        for (alias, value) in aliases {
            palette.register_alias(alias.as_ref(), value.as_ref())?;
        }
        Ok(palette)
    }

    /// Color returned for names that do not resolve
    pub fn with_fallback(mut self, fallback: Color) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> Color {
        self.fallback
    }

    /// Register `alias` as another name for `value`.
    ///
    /// `value` must be a built-in name or a color literal; aliases cannot
    /// refer to other aliases.
    pub fn register_alias(&mut self, alias: &str, value: &str) -> Result<()> {
        let key = normalize(alias);
        if key.is_empty() {
            return Err(ThemeError::EmptyAlias);
        }

        let color = builtin(value).ok_or_else(|| ThemeError::InvalidColor {
            alias: alias.to_string(),
            value: value.to_string(),
        })?;

        tracing::debug!(alias = %key, ?color, "Registered color alias");
        self.aliases.insert(key, color);
        Ok(())
    }

    /// Number of registered aliases
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Resolve `name`, failing for unknown names
    pub fn try_resolve(&self, name: &str) -> Result<Color> {
        self.aliases
            .get(&normalize(name))
            .copied()
            .or_else(|| builtin(name))
            .ok_or_else(|| ThemeError::UnknownColor(name.to_string()))
    }

    /// Resolve `name`, using the fallback color for unknown names
    pub fn resolve(&self, name: &str) -> Color {
        match self.try_resolve(name) {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!("{}, using {:?}", e, self.fallback);
                self.fallback
            }
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn builtin(name: &str) -> Option<Color> {
    let key = normalize(name);
    ANSI_NAMES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, color)| *color)
        .or_else(|| Color::from_str(&key).ok())
}
