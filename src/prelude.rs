//! Prelude module for gratuity
//!
//! This module re-exports commonly used structs, traits, and types to allow
//! for easier usage of the library.
//!
//! # Usage
//!
//! ```rust
//! use gratuity::prelude::*;
//! ```

// Core exports
pub use crate::calculator::{ComputeTip, TipCalculator, TipInputs, compute};
pub use crate::config::TipConfig;
pub use crate::i18n::{CurrencyFormatter, TipLocale};
pub use crate::inputs::{IntoTipDecimal, amount_or_zero};
pub use crate::types::{CalculationStep, TipBreakdown, TipDisplay, TipError};
