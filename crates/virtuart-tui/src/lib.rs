//! virtuart-tui - Terminal UI for the VirtuArt gallery
//!
//! This crate provides the ratatui-based landing page. It builds an
//! `AppState` from virtuart-app, mounts the gallery subscriptions and adds
//! terminal rendering, input listening and widget display.

pub mod event;
pub mod layout;
pub mod listener;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
