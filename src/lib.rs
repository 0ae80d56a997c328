//! Work-log form
//!
//! Terminal form for logging work: a user search field with filtered
//! suggestions, recent and favorite selections, and start/end time pickers.
//!
//! The state engines in [`state`] are pure and terminal-free; [`view`] is the
//! ratatui shell that feeds them key events and renders their snapshots.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
