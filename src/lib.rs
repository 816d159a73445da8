//! Workspace-level integration tests for Paneboard.
//!
//! The tests live under `tests/` and exercise the focus tracker through the
//! concrete terminal surface.
