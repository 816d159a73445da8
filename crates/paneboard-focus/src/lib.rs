//! Paneboard focus tracking
//!
//! Moves keyboard focus between the text-view widgets of a dashboard and
//! marks the focused one through its border color. The tracker only
//! coordinates: views, the application's focus handle, color resolution and
//! configuration lookup are supplied through the traits in [`traits`].

pub mod adapters;
pub mod tracker;
pub mod traits;

pub use tracker::{FocusTracker, DEFAULT_FOCUSED_BORDER, FOCUSED_BORDER_KEY};
pub use traits::{ColorResolver, ConfigLookup, FocusHandle, Focusable, ViewHandle, ViewId};
