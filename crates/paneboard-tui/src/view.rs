//! Bordered text view
//!
//! A [`TextView`] is a cheap handle: clones share the same state, so the
//! dashboard can render a view while the focus tracker recolors it.

use std::{cell::RefCell, rc::Rc};

use paneboard_focus::{ViewHandle, ViewId};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug)]
struct TextViewState {
    title: String,
    text: String,
    border_color: Color,
    has_focus: bool,
}

/// Shared handle to a bordered text panel
#[derive(Debug, Clone)]
pub struct TextView {
    id: ViewId,
    state: Rc<RefCell<TextViewState>>,
}

impl TextView {
    /// Create a new view with the terminal's default border color
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::next(),
            state: Rc::new(RefCell::new(TextViewState {
                title: title.into(),
                text: String::new(),
                border_color: Color::Reset,
                has_focus: false,
            })),
        }
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Replace the panel content
    pub fn set_text(&self, text: impl Into<String>) {
        self.state.borrow_mut().text = text.into();
    }

    pub fn border_color(&self) -> Color {
        self.state.borrow().border_color
    }

    pub fn has_focus(&self) -> bool {
        self.state.borrow().has_focus
    }

    /// Render the view to the given frame and area
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let state = self.state.borrow();

        let mut border_style = Style::default().fg(state.border_color);
        if state.has_focus {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .title(state.title.clone())
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(state.text.clone())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

impl ViewHandle for TextView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn focus(&self) {
        self.state.borrow_mut().has_focus = true;
    }

    fn blur(&self) {
        self.state.borrow_mut().has_focus = false;
    }

    fn set_border_color(&self, color: Color) {
        self.state.borrow_mut().border_color = color;
    }
}
