use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TipConfig;
use crate::i18n::CurrencyFormatter;

/// Represents a single step in the tip calculation process.
///
/// This struct provides transparency into how the final tip amount was
/// derived, enabling users to understand and verify each step of the
/// calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    /// The operation type: "initial", "rate", "ceil", "result", "info"
    pub operation: String,
}

impl CalculationStep {
    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "initial".to_string(),
        }
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(rate),
            operation: "rate".to_string(),
        }
    }

    pub fn ceil(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "ceil".to_string(),
        }
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "result".to_string(),
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: "info".to_string(),
        }
    }
}

/// Represents the detailed breakdown of a tip calculation.
///
/// This is a derived value: it is recomputed on every input change and
/// carries no identity or lifecycle of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipBreakdown {
    /// The bill total the tip is computed from.
    pub bill_amount: Decimal,
    /// Tip percentage as entered (e.g. 15 for 15%).
    pub tip_percent: Decimal,
    /// The applied rate (tip_percent / 100).
    pub tip_rate: Decimal,
    /// Tip before any rounding policy is applied.
    pub raw_tip: Decimal,
    /// The final tip amount due (ceiling of raw_tip when rounding up).
    pub tip_due: Decimal,
    /// Bill plus tip.
    pub total_due: Decimal,
    /// Whether the round-up policy was requested.
    pub rounded_up: bool,
    /// Optional label for the computation (e.g. "Dinner", "Table 4").
    pub label: Option<String>,
    /// Step-by-step trace of how this calculation was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl TipBreakdown {
    /// Creates a TipBreakdown from already-computed values and a custom
    /// calculation trace. The total is derived here so it can never drift
    /// from bill + tip.
    pub fn with_trace(
        bill_amount: Decimal,
        tip_percent: Decimal,
        tip_rate: Decimal,
        raw_tip: Decimal,
        tip_due: Decimal,
        rounded_up: bool,
        trace: Vec<CalculationStep>,
    ) -> Self {
        TipBreakdown {
            bill_amount,
            tip_percent,
            tip_rate,
            raw_tip,
            tip_due,
            total_due: bill_amount + tip_due,
            rounded_up,
            label: None,
            calculation_trace: trace,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the tip due formatted as a plain string with 2 decimal places.
    pub fn format_amount(&self) -> String {
        use rust_decimal::RoundingStrategy;
        let rounded = self
            .tip_due
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// Returns the tip due rendered in the configured locale's currency.
    pub fn formatted_tip(&self, config: &TipConfig) -> String {
        config.locale.format_currency(self.tip_due)
    }

    /// Returns a concise status string.
    /// Format: "{Label}: {Exact/Rounded Up} - Tip: {Amount}"
    pub fn summary(&self) -> String {
        let label_str = self.label.as_deref().unwrap_or("Tip");
        let status = if self.rounded_up { "Rounded Up" } else { "Exact" };
        format!("{}: {} - Tip: {}", label_str, status, self.format_amount())
    }

    /// Builds the display-ready view model for this breakdown.
    pub fn to_display(&self, config: &TipConfig) -> TipDisplay {
        TipDisplay {
            formatted_bill: config.locale.format_currency(self.bill_amount),
            formatted_tip: config.locale.format_currency(self.tip_due),
            formatted_total: config.locale.format_currency(self.total_due),
            currency_code: config.locale.currency_code().to_string(),
            status: if self.rounded_up { "ROUNDED UP" } else { "EXACT" }.to_string(),
        }
    }

    /// Generates a human-readable explanation of the tip calculation.
    ///
    /// The output is formatted as a step-by-step list, showing operations
    /// and their results, helping users understand exactly how the
    /// `tip_due` was determined.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        let label = self.label.as_deref().unwrap_or("Tip");

        writeln!(&mut output, "Explanation for '{}':", label).unwrap();
        writeln!(&mut output, "{:-<50}", "").unwrap();

        let max_desc_len = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            let op_symbol = match step.operation.as_str() {
                "initial" => " ",
                "rate" => "x",
                "ceil" => "^",
                "result" => "=",
                _ => " ",
            };

            let amount_str = if let Some(amt) = step.amount {
                if step.operation == "rate" {
                    format!("{:.3}", amt)
                } else {
                    format!("{:.2}", amt)
                }
            } else {
                String::new()
            };

            if step.operation == "info" {
                writeln!(&mut output, "  INFO: {}", step.description).unwrap();
            } else {
                writeln!(
                    &mut output,
                    "  {:<width$} : {} {:>10} ({})",
                    step.description,
                    op_symbol,
                    amount_str,
                    step.operation,
                    width = max_desc_len
                )
                .unwrap();
            }
        }

        writeln!(&mut output, "{:-<50}", "").unwrap();
        writeln!(
            &mut output,
            "Policy: {}",
            if self.rounded_up { "ROUND UP" } else { "EXACT" }
        )
        .unwrap();
        writeln!(&mut output, "Tip Due: {}", self.format_amount()).unwrap();

        output
    }
}

impl std::fmt::Display for TipBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_str = self.label.as_deref().unwrap_or("Tip");
        writeln!(f, "Calculation: {}", label_str)?;
        writeln!(
            f,
            "Bill: {} | Percent: {} | Round Up: {}",
            self.bill_amount, self.tip_percent, self.rounded_up
        )?;
        write!(f, "Tip Due: {} (Total: {})", self.format_amount(), self.total_due)
    }
}

/// Display-ready view model: everything a front end needs to render a
/// result without touching the formatter itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipDisplay {
    pub formatted_bill: String,
    pub formatted_tip: String,
    pub formatted_total: String,
    pub currency_code: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum TipError {
    #[error("Invalid Input [{}]: field '{}' {}", .source_label.as_deref().unwrap_or("Tip"), .field, .reason)]
    InvalidInput {
        field: String,
        reason: String,
        source_label: Option<String>,
    },
    #[error("Arithmetic Overflow [{}]: operation '{}' failed", .source_label.as_deref().unwrap_or("Tip"), .operation)]
    Overflow {
        operation: String,
        source_label: Option<String>,
    },
    #[error("Configuration Error: {reason}")]
    ConfigurationError { reason: String },
}

impl TipError {
    pub fn with_source(self, source: String) -> Self {
        match self {
            TipError::InvalidInput { field, reason, .. } => TipError::InvalidInput {
                field,
                reason,
                source_label: Some(source),
            },
            TipError::Overflow { operation, .. } => TipError::Overflow {
                operation,
                source_label: Some(source),
            },
            other => other,
        }
    }
}
