pub mod calculator;
pub mod config;
pub mod i18n;
pub mod inputs;
pub mod math;
pub mod prelude;
pub mod types;

pub use calculator::{ComputeTip, TipCalculator, TipInputs, compute};
pub use config::TipConfig;
pub use i18n::{CurrencyFormatter, TipLocale};
pub use types::{TipBreakdown, TipDisplay, TipError};
