//! # TUI Module
//!
//! Full-screen terminal user interface for the tip calculator.
//!
//! A single screen owns the three mutable inputs (bill text, tip-percent
//! text, round-up toggle) and re-runs the pure calculation on every change.

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod ui_tests;

pub use app::App;
pub use event::handle_events;
pub use ui::ui;
