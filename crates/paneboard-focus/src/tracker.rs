//! Focus tracker
//!
//! Tracks which dashboard widget holds focus and moves focus between the
//! focusable ones. The cursor indexes the *focusable subset* of the widget
//! list, which is recomputed on every call so that widgets may toggle their
//! focusability at any time. A stale cursor simply resolves to nothing.
//!
//! A cursor of `None` means the tracker is not managing focus. In that state
//! `next` and `prev` always proceed, landing on the first or last focusable
//! widget respectively.

use std::rc::Rc;

use crate::traits::{ColorResolver, ConfigLookup, FocusHandle, Focusable};

/// Configuration key holding the color name for focused borders
pub const FOCUSED_BORDER_KEY: &str = "colors.border.focused";

/// Focused border color used when the key is not configured
pub const DEFAULT_FOCUSED_BORDER: &str = "gray";

/// Moves focus between a fixed list of widgets
pub struct FocusTracker<A: FocusHandle> {
    app: A,
    idx: Option<usize>,
    widgets: Vec<Rc<dyn Focusable>>,
    colors: Rc<dyn ColorResolver>,
    config: Rc<dyn ConfigLookup>,
}

impl<A: FocusHandle> FocusTracker<A> {
    /// Create a tracker that is not yet managing focus
    pub fn new(
        app: A,
        widgets: Vec<Rc<dyn Focusable>>,
        colors: Rc<dyn ColorResolver>,
        config: Rc<dyn ConfigLookup>,
    ) -> Self {
        Self {
            app,
            idx: None,
            widgets,
            colors,
            config,
        }
    }

    /// Focus the next focusable widget, wrapping to the first.
    ///
    /// Does nothing while focus is held by something outside the widget
    /// list, such as a modal dialog.
    pub fn next(&mut self) {
        if !self.widget_has_focus() {
            tracing::trace!("Focus held outside tracked widgets, ignoring next");
            return;
        }

        let from = self.idx;
        self.blur(self.idx);
        self.increment();
        self.focus(self.idx);
        tracing::debug!(?from, to = ?self.idx, "Focus moved forward");
    }

    /// Focus the previous focusable widget, wrapping to the last.
    ///
    /// Same guard as [`FocusTracker::next`].
    pub fn prev(&mut self) {
        if !self.widget_has_focus() {
            tracing::trace!("Focus held outside tracked widgets, ignoring prev");
            return;
        }

        let from = self.idx;
        self.blur(self.idx);
        self.decrement();
        self.focus(self.idx);
        tracing::debug!(?from, to = ?self.idx, "Focus moved backward");
    }

    /// Blur the current widget without forgetting the cursor
    pub fn none(&mut self) {
        self.blur(self.idx);
    }

    /// Re-apply focus to the widget under the cursor
    pub fn refocus(&mut self) {
        self.focus(self.idx);
    }

    /// Current cursor into the focusable subset
    pub fn index(&self) -> Option<usize> {
        self.idx
    }

    /// Move the cursor without touching any view
    pub fn set_index(&mut self, idx: Option<usize>) {
        self.idx = idx;
    }

    /// Stop managing focus
    pub fn release(&mut self) {
        self.idx = None;
    }

    /// The application focus handle
    pub fn app(&self) -> &A {
        &self.app
    }

    /// Every tracked widget, focusable or not
    pub fn widgets(&self) -> &[Rc<dyn Focusable>] {
        &self.widgets
    }

    /// Widgets currently reporting themselves focusable, in list order
    pub fn focusables(&self) -> Vec<Rc<dyn Focusable>> {
        self.widgets
            .iter()
            .filter(|widget| widget.is_focusable())
            .cloned()
            .collect()
    }

    /// The widget under the cursor, if the cursor resolves
    pub fn focused_widget(&self) -> Option<Rc<dyn Focusable>> {
        self.focusable_at(self.idx)
    }

    /// True when the tracker is unmanaged, or when the application's focus
    /// sits on one of the tracked widgets.
    pub fn widget_has_focus(&self) -> bool {
        if self.idx.is_none() {
            return true;
        }

        let Some(current) = self.app.current_focus() else {
            return false;
        };

        self.widgets
            .iter()
            .any(|widget| widget.view().id() == current)
    }

    fn blur(&self, idx: Option<usize>) {
        let Some(widget) = self.focusable_at(idx) else {
            tracing::trace!(?idx, "Nothing to blur");
            return;
        };

        let view = widget.view();
        view.blur();
        view.set_border_color(self.colors.resolve(&widget.border_color_name()));
    }

    fn focus(&self, idx: Option<usize>) {
        let Some(widget) = self.focusable_at(idx) else {
            tracing::trace!(?idx, "Nothing to focus");
            return;
        };

        let view = widget.view();
        self.app.set_focus(view);

        let color_name = self
            .config
            .get_string(FOCUSED_BORDER_KEY, DEFAULT_FOCUSED_BORDER);
        view.set_border_color(self.colors.resolve(&color_name));
    }

    fn focusable_at(&self, idx: Option<usize>) -> Option<Rc<dyn Focusable>> {
        let idx = idx?;
        self.focusables().into_iter().nth(idx)
    }

    fn increment(&mut self) {
        let len = self.focusables().len();
        if len == 0 {
            return;
        }

        self.idx = Some(match self.idx {
            None => 0,
            Some(idx) => (idx % len + 1) % len,
        });
    }

    fn decrement(&mut self) {
        let len = self.focusables().len();
        if len == 0 {
            return;
        }

        self.idx = Some(match self.idx {
            None => len - 1,
            Some(idx) => (idx % len + len - 1) % len,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
    };

    use ratatui::style::Color;

    use super::*;
    use crate::traits::{ViewHandle, ViewId};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Blur(ViewId),
        Focus(ViewId),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct MockView {
        id: ViewId,
        border: Cell<Option<Color>>,
        log: Log,
    }

    impl ViewHandle for MockView {
        fn id(&self) -> ViewId {
            self.id
        }

        fn blur(&self) {
            self.log.borrow_mut().push(Call::Blur(self.id));
        }

        fn set_border_color(&self, color: Color) {
            self.border.set(Some(color));
        }
    }

    struct MockWidget {
        view: MockView,
        focusable: Cell<bool>,
    }

    impl Focusable for MockWidget {
        fn is_focusable(&self) -> bool {
            self.focusable.get()
        }

        fn view(&self) -> &dyn ViewHandle {
            &self.view
        }

        fn border_color_name(&self) -> String {
            "white".to_string()
        }
    }

    #[derive(Clone)]
    struct MockApp {
        current: Rc<Cell<Option<ViewId>>>,
        log: Log,
    }

    impl FocusHandle for MockApp {
        fn current_focus(&self) -> Option<ViewId> {
            self.current.get()
        }

        fn set_focus(&self, view: &dyn ViewHandle) {
            self.current.set(Some(view.id()));
            self.log.borrow_mut().push(Call::Focus(view.id()));
        }
    }

    struct Names;

    impl ColorResolver for Names {
        fn resolve(&self, name: &str) -> Color {
            match name {
                "gray" => Color::DarkGray,
                "white" => Color::White,
                "yellow" => Color::Yellow,
                _ => Color::Reset,
            }
        }
    }

    #[derive(Default)]
    struct Settings(HashMap<String, String>);

    impl ConfigLookup for Settings {
        fn get_string(&self, key: &str, default: &str) -> String {
            self.0
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        }
    }

    struct Fixture {
        tracker: FocusTracker<MockApp>,
        widgets: Vec<Rc<MockWidget>>,
        app: MockApp,
        log: Log,
    }

    fn fixture(focusable: &[bool], settings: Settings) -> Fixture {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let widgets: Vec<Rc<MockWidget>> = focusable
            .iter()
            .map(|&focusable| {
                Rc::new(MockWidget {
                    view: MockView {
                        id: ViewId::next(),
                        border: Cell::new(None),
                        log: log.clone(),
                    },
                    focusable: Cell::new(focusable),
                })
            })
            .collect();
        let app = MockApp {
            current: Rc::new(Cell::new(None)),
            log: log.clone(),
        };
        let tracked = widgets
            .iter()
            .map(|widget| widget.clone() as Rc<dyn Focusable>)
            .collect();
        let tracker = FocusTracker::new(app.clone(), tracked, Rc::new(Names), Rc::new(settings));

        Fixture {
            tracker,
            widgets,
            app,
            log,
        }
    }

    #[test]
    fn test_next_skips_unfocusable_and_wraps() {
        let mut f = fixture(&[true, false, true], Settings::default());
        let (a, c) = (f.widgets[0].view.id, f.widgets[2].view.id);
        f.tracker.set_index(Some(0));
        f.app.current.set(Some(a));

        f.tracker.next();
        assert_eq!(f.tracker.index(), Some(1));
        assert_eq!(f.app.current.get(), Some(c));
        assert_eq!(*f.log.borrow(), vec![Call::Blur(a), Call::Focus(c)]);
        assert_eq!(f.widgets[0].view.border.get(), Some(Color::White));
        assert_eq!(f.widgets[2].view.border.get(), Some(Color::DarkGray));

        f.tracker.next();
        assert_eq!(f.tracker.index(), Some(0));
        assert_eq!(f.app.current.get(), Some(a));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut f = fixture(&[true, true, true], Settings::default());
        f.tracker.set_index(Some(0));
        f.app.current.set(Some(f.widgets[0].view.id));

        f.tracker.prev();
        assert_eq!(f.tracker.index(), Some(2));
        assert_eq!(f.app.current.get(), Some(f.widgets[2].view.id));
    }

    #[test]
    fn test_unmanaged_next_starts_at_first() {
        let mut f = fixture(&[false, true, true], Settings::default());
        assert_eq!(f.tracker.index(), None);
        assert!(f.tracker.widget_has_focus());

        f.tracker.next();
        assert_eq!(f.tracker.index(), Some(0));
        assert_eq!(f.app.current.get(), Some(f.widgets[1].view.id));
    }

    #[test]
    fn test_unmanaged_prev_starts_at_last() {
        let mut f = fixture(&[true, true, false], Settings::default());

        f.tracker.prev();
        assert_eq!(f.tracker.index(), Some(1));
        assert_eq!(f.app.current.get(), Some(f.widgets[1].view.id));
    }

    #[test]
    fn test_external_focus_blocks_cycling() {
        let mut f = fixture(&[true, true], Settings::default());
        f.tracker.set_index(Some(0));
        f.app.current.set(Some(ViewId::next()));

        assert!(!f.tracker.widget_has_focus());
        f.tracker.next();
        f.tracker.prev();
        assert_eq!(f.tracker.index(), Some(0));
        assert!(f.log.borrow().is_empty());
    }

    #[test]
    fn test_absent_focus_blocks_cycling_when_managed() {
        let mut f = fixture(&[true, true], Settings::default());
        f.tracker.set_index(Some(1));

        f.tracker.next();
        assert_eq!(f.tracker.index(), Some(1));
        assert!(f.log.borrow().is_empty());
    }

    #[test]
    fn test_focus_on_unfocusable_widget_counts_as_tracked() {
        let mut f = fixture(&[true, false, true], Settings::default());
        f.tracker.set_index(Some(0));
        f.app.current.set(Some(f.widgets[1].view.id));

        assert!(f.tracker.widget_has_focus());
        f.tracker.next();
        assert_eq!(f.tracker.index(), Some(1));
    }

    #[test]
    fn test_none_keeps_cursor() {
        let mut f = fixture(&[true, true], Settings::default());
        f.tracker.set_index(Some(1));

        f.tracker.none();
        assert_eq!(f.tracker.index(), Some(1));
        assert_eq!(*f.log.borrow(), vec![Call::Blur(f.widgets[1].view.id)]);

        f.tracker.release();
        f.tracker.none();
        assert_eq!(f.tracker.index(), None);
        assert_eq!(f.log.borrow().len(), 1);
    }

    #[test]
    fn test_refocus_restores_current_widget() {
        let mut f = fixture(&[true, true], Settings::default());
        f.tracker.set_index(Some(1));

        f.tracker.refocus();
        assert_eq!(f.app.current.get(), Some(f.widgets[1].view.id));
        assert_eq!(f.tracker.index(), Some(1));
    }

    #[test]
    fn test_refocus_out_of_range_is_noop() {
        let mut f = fixture(&[true, true], Settings::default());
        f.tracker.set_index(Some(1));
        f.widgets[1].focusable.set(false);

        f.tracker.refocus();
        assert!(f.log.borrow().is_empty());
        assert_eq!(f.app.current.get(), None);
    }

    #[test]
    fn test_empty_subset_is_noop() {
        let mut f = fixture(&[false, false], Settings::default());
        f.tracker.next();
        f.tracker.prev();
        assert_eq!(f.tracker.index(), None);

        let mut empty = fixture(&[], Settings::default());
        empty.tracker.set_index(Some(0));
        empty.tracker.next();
        empty.tracker.prev();
        assert_eq!(empty.tracker.index(), Some(0));
        assert!(empty.log.borrow().is_empty());
    }

    #[test]
    fn test_stale_cursor_wraps_into_range() {
        let mut f = fixture(&[true, true, true], Settings::default());
        f.tracker.set_index(Some(2));
        f.app.current.set(Some(f.widgets[2].view.id));
        f.widgets[0].focusable.set(false);

        // Cursor 2 no longer resolves; blur is skipped and the step wraps.
        f.tracker.next();
        assert_eq!(f.tracker.index(), Some(1));
        assert_eq!(*f.log.borrow(), vec![Call::Focus(f.widgets[2].view.id)]);
    }

    #[test]
    fn test_configured_focus_color() {
        let mut settings = Settings::default();
        settings
            .0
            .insert(FOCUSED_BORDER_KEY.to_string(), "yellow".to_string());
        let mut f = fixture(&[true], settings);

        f.tracker.next();
        assert_eq!(f.widgets[0].view.border.get(), Some(Color::Yellow));
    }

    #[test]
    fn test_focused_widget_follows_live_focusability() {
        let mut f = fixture(&[true, true, true], Settings::default());
        f.tracker.set_index(Some(1));
        let first = f.tracker.focused_widget().map(|w| w.view().id());
        assert_eq!(first, Some(f.widgets[1].view.id));

        f.widgets[0].focusable.set(false);
        let shifted = f.tracker.focused_widget().map(|w| w.view().id());
        assert_eq!(shifted, Some(f.widgets[2].view.id));
        assert_eq!(f.tracker.focusables().len(), 2);
        assert_eq!(f.tracker.widgets().len(), 3);
    }

    proptest::proptest! {
        #[test]
        fn prop_next_then_prev_is_identity(
            flags in proptest::collection::vec(proptest::bool::ANY, 1..8),
            start in 0usize..8,
        ) {
            let mut f = fixture(&flags, Settings::default());
            let len = f.tracker.focusables().len();
            proptest::prop_assume!(len > 0);
            let start = start % len;
            f.tracker.set_index(Some(start));
            f.tracker.refocus();

            f.tracker.next();
            f.tracker.prev();
            proptest::prop_assert_eq!(f.tracker.index(), Some(start));

            f.tracker.prev();
            f.tracker.next();
            proptest::prop_assert_eq!(f.tracker.index(), Some(start));
        }
    }
}
