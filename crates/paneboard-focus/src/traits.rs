//! Capability traits consumed by the focus tracker
//!
//! Each trait covers one collaborator. Implementations live with the
//! concrete surface (see `paneboard-tui`), or in [`crate::adapters`] for the
//! palette and configuration types.

use std::sync::atomic::{AtomicU64, Ordering};

use ratatui::style::Color;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an on-screen view.
///
/// The application focus handle reports focus by id, so two handles to the
/// same view compare equal even when they are distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Allocate a fresh, process-unique id
    pub fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A view that can lose focus and be recolored
pub trait ViewHandle {
    /// Identity used to compare against the application's focus target
    fn id(&self) -> ViewId;

    /// Called by a focus handle when it delivers focus to this view
    fn focus(&self) {}

    /// Drop input focus
    fn blur(&self);

    /// Repaint the border
    fn set_border_color(&self, color: Color);
}

/// Widget capabilities the tracker cycles over
pub trait Focusable {
    /// Whether the widget can currently receive focus.
    ///
    /// Read on every tracker operation, so it may change at any time.
    fn is_focusable(&self) -> bool;

    /// The view that receives focus and border colors
    fn view(&self) -> &dyn ViewHandle;

    /// Color name used for the border while unfocused
    fn border_color_name(&self) -> String;
}

/// The application's focus-delivery mechanism
pub trait FocusHandle {
    /// What currently holds input focus, if anything
    fn current_focus(&self) -> Option<ViewId>;

    /// Give input focus to `view`
    fn set_focus(&self, view: &dyn ViewHandle);
}

/// Color name to color value lookup
pub trait ColorResolver {
    fn resolve(&self, name: &str) -> Color;
}

/// String configuration lookup with a caller-supplied default
pub trait ConfigLookup {
    fn get_string(&self, key: &str, default: &str) -> String;
}
