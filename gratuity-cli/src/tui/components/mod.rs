//! Component widgets for the TUI.
//!
//! This module contains reusable UI components for building
//! the tip calculator terminal user interface.

pub mod stat_card;

pub use stat_card::{InlineStat, StatCard};
