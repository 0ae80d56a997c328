//! Internal test modules - whitebox tests with crate access
//!
//! Rendering tests drive a real `ScreenController` and draw its snapshot into
//! a ratatui `TestBackend`.

mod view_snapshots;
