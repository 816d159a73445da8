//! Application focus handle

use std::{cell::Cell, rc::Rc};

use paneboard_focus::{FocusHandle, ViewHandle, ViewId};

/// Records which surface holds input focus.
///
/// Clones share the same focus slot, so the dashboard and the focus tracker
/// each keep a handle.
#[derive(Debug, Clone, Default)]
pub struct AppFocus {
    current: Rc<Cell<Option<ViewId>>>,
}

impl AppFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give focus to a surface the tracker does not manage, e.g. a dialog
    pub fn focus_external(&self, id: ViewId) {
        tracing::debug!(?id, "Focus handed to external surface");
        self.current.set(Some(id));
    }

    /// Nothing holds focus
    pub fn clear(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<ViewId> {
        self.current.get()
    }
}

impl FocusHandle for AppFocus {
    fn current_focus(&self) -> Option<ViewId> {
        self.current.get()
    }

    fn set_focus(&self, view: &dyn ViewHandle) {
        let id = view.id();
        tracing::debug!(?id, "Focus delivered");
        self.current.set(Some(id));
        view.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TextView;

    #[test]
    fn test_set_focus_marks_view() {
        let app = AppFocus::new();
        let view = TextView::new("Clock");

        app.set_focus(&view);
        assert_eq!(app.current(), Some(ViewHandle::id(&view)));
        assert!(view.has_focus());
    }

    #[test]
    fn test_clones_share_focus() {
        let app = AppFocus::new();
        let other = app.clone();
        let modal = ViewId::next();

        other.focus_external(modal);
        assert_eq!(app.current_focus(), Some(modal));

        app.clear();
        assert_eq!(other.current(), None);
    }
}
