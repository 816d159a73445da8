//! Dashboard text widget

use std::cell::Cell;

use paneboard_config::WidgetConfig;
use paneboard_focus::{Focusable, ViewHandle};

use crate::view::TextView;

/// A named panel the focus tracker can cycle over
#[derive(Debug)]
pub struct TextWidget {
    name: String,
    view: TextView,
    focusable: Cell<bool>,
    border_color: String,
}

impl TextWidget {
    /// Create a focusable widget with a fresh view titled `name`
    pub fn new(name: impl Into<String>, border_color: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            view: TextView::new(name.clone()),
            name,
            focusable: Cell::new(true),
            border_color: border_color.into(),
        }
    }

    /// Build from config; `default_border` applies when the widget sets none
    pub fn from_config(config: &WidgetConfig, default_border: &str) -> Self {
        let view = TextView::new(config.display_title());
        if let Some(text) = &config.text {
            view.set_text(text.clone());
        }

        Self {
            name: config.name.clone(),
            view,
            focusable: Cell::new(config.focusable),
            border_color: config
                .border_color
                .clone()
                .unwrap_or_else(|| default_border.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text_view(&self) -> &TextView {
        &self.view
    }

    /// Toggle focusability; the tracker picks this up on its next call
    pub fn set_focusable(&self, focusable: bool) {
        self.focusable.set(focusable);
    }
}

impl Focusable for TextWidget {
    fn is_focusable(&self) -> bool {
        self.focusable.get()
    }

    fn view(&self) -> &dyn ViewHandle {
        &self.view
    }

    fn border_color_name(&self) -> String {
        self.border_color.clone()
    }
}
