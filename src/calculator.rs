//! The tip calculation core.
//!
//! The three UI inputs (bill text, tip-percent text, round-up flag) are
//! captured as an immutable [`TipInputs`] value; the calculation itself is
//! a pure function of those inputs and the configured locale. Front ends
//! own the mutable state and re-invoke the calculator on every change.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TipConfig;
use crate::i18n::CurrencyFormatter;
use crate::inputs::{IntoTipDecimal, amount_or_zero};
use crate::math::TipDecimal;
use crate::types::{CalculationStep, TipBreakdown, TipError};

/// Immutable snapshot of the three inputs a tip is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TipInputs {
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub round_up: bool,
}

impl TipInputs {
    /// Builds inputs from typed values. Negative amounts are rejected;
    /// the free-form path is [`TipInputs::from_text`].
    pub fn new(
        bill: impl IntoTipDecimal,
        percent: impl IntoTipDecimal,
        round_up: bool,
    ) -> Result<Self, TipError> {
        let bill_amount = bill.into_tip_decimal()?;
        let tip_percent = percent.into_tip_decimal()?;

        if bill_amount < Decimal::ZERO {
            return Err(TipError::InvalidInput {
                field: "bill_amount".to_string(),
                reason: "must be non-negative".to_string(),
                source_label: None,
            });
        }
        if tip_percent < Decimal::ZERO {
            return Err(TipError::InvalidInput {
                field: "tip_percent".to_string(),
                reason: "must be non-negative".to_string(),
                source_label: None,
            });
        }

        Ok(TipInputs {
            bill_amount,
            tip_percent,
            round_up,
        })
    }

    /// Builds inputs from free-form text fields.
    ///
    /// Invalid or empty text yields zero, and negative values are clamped
    /// to zero. This constructor never fails.
    pub fn from_text(bill: &str, percent: &str, round_up: bool) -> Self {
        TipInputs {
            bill_amount: amount_or_zero(bill).max(Decimal::ZERO),
            tip_percent: amount_or_zero(percent).max(Decimal::ZERO),
            round_up,
        }
    }
}

/// Trait to be implemented by tip calculators.
pub trait ComputeTip {
    /// Compute the tip breakdown for the configured locale.
    fn compute_tip(&self, config: &TipConfig) -> Result<TipBreakdown, TipError>;

    /// Returns the label of the calculation, if any.
    fn get_label(&self) -> Option<String> {
        None
    }
}

/// Builder-style tip calculator.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct TipCalculator {
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub round_up: bool,
    pub label: Option<String>,
}

impl TipCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(mut self, bill: impl IntoTipDecimal) -> Self {
        if let Ok(b) = bill.into_tip_decimal() {
            self.bill_amount = b;
        }
        self
    }

    pub fn percent(mut self, percent: impl IntoTipDecimal) -> Self {
        if let Ok(p) = percent.into_tip_decimal() {
            self.tip_percent = p;
        }
        self
    }

    pub fn round_up(mut self, round_up: bool) -> Self {
        self.round_up = round_up;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<TipInputs> for TipCalculator {
    fn from(inputs: TipInputs) -> Self {
        TipCalculator {
            bill_amount: inputs.bill_amount,
            tip_percent: inputs.tip_percent,
            round_up: inputs.round_up,
            label: None,
        }
    }
}

impl ComputeTip for TipCalculator {
    fn compute_tip(&self, _config: &TipConfig) -> Result<TipBreakdown, TipError> {
        if self.bill_amount < Decimal::ZERO {
            return Err(TipError::InvalidInput {
                field: "bill_amount".to_string(),
                reason: "must be non-negative".to_string(),
                source_label: self.label.clone(),
            });
        }
        if self.tip_percent < Decimal::ZERO {
            return Err(TipError::InvalidInput {
                field: "tip_percent".to_string(),
                reason: "must be non-negative".to_string(),
                source_label: self.label.clone(),
            });
        }

        let rate = TipDecimal::new(self.tip_percent)
            .with_source(self.label.clone())
            .safe_div(dec!(100))?;
        let raw_tip = rate.clone().safe_mul(self.bill_amount)?;

        let tip_due = if self.round_up {
            raw_tip.clone().ceil_whole()
        } else {
            raw_tip.clone()
        };

        let total_due = TipDecimal::new(self.bill_amount)
            .with_source(self.label.clone())
            .safe_add(*tip_due)?;

        // Build calculation trace
        let mut trace = Vec::new();
        trace.push(CalculationStep::initial("Bill Amount", self.bill_amount));
        trace.push(CalculationStep::rate("Tip Rate", *rate));
        trace.push(CalculationStep::result("Raw Tip", *raw_tip));

        if self.round_up {
            if *tip_due > *raw_tip {
                trace.push(CalculationStep::ceil("Rounded Up To", *tip_due));
            } else {
                trace.push(CalculationStep::info("Round-up requested - tip already whole"));
            }
        }

        let tip_due = *tip_due;
        trace.push(CalculationStep::result("Tip Due", tip_due));
        trace.push(CalculationStep::result("Total With Tip", *total_due));

        debug!(
            bill = %self.bill_amount,
            percent = %self.tip_percent,
            round_up = self.round_up,
            tip_due = %tip_due,
            "computed tip"
        );

        let breakdown = TipBreakdown::with_trace(
            self.bill_amount,
            self.tip_percent,
            *rate,
            *raw_tip,
            tip_due,
            self.round_up,
            trace,
        );

        Ok(match &self.label {
            Some(label) => breakdown.with_label(label.clone()),
            None => breakdown,
        })
    }

    fn get_label(&self) -> Option<String> {
        self.label.clone()
    }
}

/// Computes a tip and renders it in the configured locale's currency.
///
/// This is the string-level contract: no error surfaces. Unparseable or
/// negative input is treated as zero, exactly like the text-field path,
/// and the (practically unreachable) overflow case renders as zero too.
pub fn compute(
    bill: impl IntoTipDecimal,
    percent: impl IntoTipDecimal,
    round_up: bool,
    config: &TipConfig,
) -> String {
    let bill = bill
        .into_tip_decimal()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);
    let percent = percent
        .into_tip_decimal()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);

    let result = TipCalculator::new()
        .bill(bill)
        .percent(percent)
        .round_up(round_up)
        .compute_tip(config);

    match result {
        Ok(breakdown) => breakdown.formatted_tip(config),
        Err(e) => {
            debug!(error = %e, "tip computation failed, rendering zero");
            config.locale.format_currency(Decimal::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TipLocale;

    #[test]
    fn test_exact_tip() {
        let config = TipConfig::default();
        // 15% of 50.00 = 7.50
        let calc = TipCalculator::new().bill(dec!(50.00)).percent(dec!(15));
        let res = calc.compute_tip(&config).unwrap();

        assert_eq!(res.tip_due, dec!(7.50));
        assert_eq!(res.total_due, dec!(57.50));
        assert!(!res.rounded_up);
    }

    #[test]
    fn test_round_up_tip() {
        let config = TipConfig::default();
        // ceil(7.50) = 8
        let calc = TipCalculator::new()
            .bill(dec!(50.00))
            .percent(dec!(15))
            .round_up(true);
        let res = calc.compute_tip(&config).unwrap();

        assert_eq!(res.raw_tip, dec!(7.50));
        assert_eq!(res.tip_due, dec!(8));
        assert_eq!(res.total_due, dec!(58.00));
    }

    #[test]
    fn test_negative_bill_rejected() {
        let config = TipConfig::default();
        let calc = TipCalculator::new()
            .bill(dec!(-10))
            .percent(dec!(15))
            .label("Table 4");
        let err = calc.compute_tip(&config).unwrap_err();

        match err {
            TipError::InvalidInput { field, source_label, .. } => {
                assert_eq!(field, "bill_amount");
                assert_eq!(source_label.as_deref(), Some("Table 4"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_string_contract_defaults_to_zero() {
        let config = TipConfig::new().with_locale(TipLocale::EnUs);
        assert_eq!(compute("garbage", "garbage", false, &config), "$0.00");
        assert_eq!(compute(dec!(-5), dec!(10), true, &config), "$0.00");
    }

    #[test]
    fn test_inputs_from_text() {
        let inputs = TipInputs::from_text("50.00", "", true);
        assert_eq!(inputs.bill_amount, dec!(50.00));
        assert_eq!(inputs.tip_percent, Decimal::ZERO);
        assert!(inputs.round_up);

        let clamped = TipInputs::from_text("-12", "15", false);
        assert_eq!(clamped.bill_amount, Decimal::ZERO);
    }
}
