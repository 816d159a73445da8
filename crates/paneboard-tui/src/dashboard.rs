//! Dashboard shell
//!
//! Builds the widgets, palette and focus tracker from configuration and
//! exposes the focus operations the input layer binds keys to. A modal
//! dialog takes focus away from the widgets; closing it hands focus back to
//! the widget that had it.

use std::{path::PathBuf, rc::Rc};

use paneboard_config::{ConfigManager, ConfigManagerTrait};
use paneboard_focus::{
    ColorResolver, ConfigLookup, FocusHandle, FocusTracker, Focusable, ViewHandle, ViewId,
    DEFAULT_FOCUSED_BORDER, FOCUSED_BORDER_KEY,
};
use paneboard_themes::ColorPalette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{app::AppFocus, error::TuiResult, widget::TextWidget};

#[derive(Debug)]
struct Modal {
    id: ViewId,
    title: String,
    message: String,
}

/// A column of text widgets with focus cycling
pub struct Dashboard {
    config: Rc<ConfigManager>,
    palette: Rc<ColorPalette>,
    app: AppFocus,
    widgets: Vec<Rc<TextWidget>>,
    tracker: FocusTracker<AppFocus>,
    modal: Option<Modal>,
}

impl Dashboard {
    /// Load configuration from `path` (or the default location) and build
    pub fn load(path: Option<PathBuf>) -> TuiResult<Self> {
        let mut config = match path {
            Some(path) => ConfigManager::with_path(path),
            None => ConfigManager::new(),
        };
        config.load()?;
        Self::new(config)
    }

    /// Build from already-loaded configuration
    pub fn new(config: ConfigManager) -> TuiResult<Self> {
        let settings = config.dashboard()?;
        config.validate_config(&settings)?;

        let palette = Rc::new(ColorPalette::from_aliases(&settings.colors.palette)?);
        let config = Rc::new(config);
        let app = AppFocus::new();

        let widgets: Vec<Rc<TextWidget>> = settings
            .widgets
            .iter()
            .map(|widget| {
                Rc::new(TextWidget::from_config(
                    widget,
                    &settings.colors.border.normal,
                ))
            })
            .collect();

        for widget in &widgets {
            let color = palette.resolve(&widget.border_color_name());
            widget.text_view().set_border_color(color);
        }

        let tracked = widgets
            .iter()
            .map(|widget| widget.clone() as Rc<dyn Focusable>)
            .collect();
        let tracker = FocusTracker::new(
            app.clone(),
            tracked,
            palette.clone() as Rc<dyn ColorResolver>,
            config.clone() as Rc<dyn ConfigLookup>,
        );

        tracing::info!(widgets = widgets.len(), "Dashboard ready");

        Ok(Self {
            config,
            palette,
            app,
            widgets,
            tracker,
            modal: None,
        })
    }

    pub fn focus_next(&mut self) {
        self.tracker.next();
    }

    pub fn focus_prev(&mut self) {
        self.tracker.prev();
    }

    /// Show a dialog and move focus onto it
    pub fn open_modal(&mut self, title: impl Into<String>, message: impl Into<String>) {
        if self.modal.is_some() {
            tracing::debug!("Modal already open");
            return;
        }

        self.tracker.none();
        let modal = Modal {
            id: ViewId::next(),
            title: title.into(),
            message: message.into(),
        };
        self.app.focus_external(modal.id);
        self.modal = Some(modal);
    }

    /// Dismiss the dialog and return focus to the widgets
    pub fn close_modal(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };

        self.tracker.refocus();
        if self.app.current_focus() == Some(modal.id) {
            self.app.clear();
        }

        // The cursor no longer resolves, so start over on the next move
        if self.tracker.focused_widget().is_none() {
            tracing::debug!(idx = ?self.tracker.index(), "Cursor lost while modal was open");
            self.tracker.release();
        }
    }

    pub fn has_modal(&self) -> bool {
        self.modal.is_some()
    }

    pub fn widget(&self, name: &str) -> Option<&Rc<TextWidget>> {
        self.widgets.iter().find(|widget| widget.name() == name)
    }

    pub fn widgets(&self) -> &[Rc<TextWidget>] {
        &self.widgets
    }

    pub fn tracker(&self) -> &FocusTracker<AppFocus> {
        &self.tracker
    }

    pub fn app(&self) -> &AppFocus {
        &self.app
    }

    /// Render every widget as an equal-height row, with the modal on top
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if !self.widgets.is_empty() {
            let count = self.widgets.len() as u32;
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(self.widgets.iter().map(|_| Constraint::Ratio(1, count)))
                .split(area);

            for (widget, row) in self.widgets.iter().zip(rows.iter()) {
                widget.text_view().render(frame, *row);
            }
        }

        if let Some(modal) = &self.modal {
            self.render_modal(frame, modal, area);
        }
    }

    fn render_modal(&self, frame: &mut Frame, modal: &Modal, area: Rect) {
        let popup = centered(area, 60, 40);
        let color_name = self
            .config
            .get_string(FOCUSED_BORDER_KEY, DEFAULT_FOCUSED_BORDER);

        let block = Block::default()
            .title(modal.title.clone())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.resolve(&color_name)));
        let paragraph = Paragraph::new(modal.message.clone())
            .block(block)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
