//! Paneboard terminal surface
//!
//! Concrete ratatui-backed views, widgets and application focus handle for
//! the focus tracker, plus a [`Dashboard`] that wires them to configuration.

pub mod app;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod view;
pub mod widget;

pub use app::AppFocus;
pub use dashboard::Dashboard;
pub use error::{TuiError, TuiResult};
pub use logging::init_logging;
pub use view::TextView;
pub use widget::TextWidget;
