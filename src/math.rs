use rust_decimal::Decimal;
use std::ops::Deref;

use crate::types::TipError;

/// A `Decimal` wrapper whose arithmetic is overflow-checked and whose
/// errors carry the label of the computation they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TipDecimal {
    value: Decimal,
    source: Option<String>,
}

impl TipDecimal {
    pub fn new(value: Decimal) -> Self {
        TipDecimal { value, source: None }
    }

    /// Attaches a source label; subsequent arithmetic errors will carry it.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn safe_add(self, rhs: Decimal) -> Result<Self, TipError> {
        match self.value.checked_add(rhs) {
            Some(value) => Ok(TipDecimal { value, source: self.source }),
            None => Err(TipError::Overflow {
                operation: format!("{} + {}", self.value, rhs),
                source_label: self.source,
            }),
        }
    }

    pub fn safe_mul(self, rhs: Decimal) -> Result<Self, TipError> {
        match self.value.checked_mul(rhs) {
            Some(value) => Ok(TipDecimal { value, source: self.source }),
            None => Err(TipError::Overflow {
                operation: format!("{} * {}", self.value, rhs),
                source_label: self.source,
            }),
        }
    }

    pub fn safe_div(self, rhs: Decimal) -> Result<Self, TipError> {
        match self.value.checked_div(rhs) {
            Some(value) => Ok(TipDecimal { value, source: self.source }),
            None => Err(TipError::Overflow {
                operation: format!("{} / {}", self.value, rhs),
                source_label: self.source,
            }),
        }
    }

    /// Rounds up to the smallest whole currency unit >= the value.
    pub fn ceil_whole(self) -> Self {
        TipDecimal {
            value: self.value.ceil(),
            source: self.source,
        }
    }
}

impl Deref for TipDecimal {
    type Target = Decimal;

    fn deref(&self) -> &Decimal {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_safe_mul_and_div() {
        let rate = TipDecimal::new(dec!(15)).safe_div(dec!(100)).unwrap();
        assert_eq!(*rate, dec!(0.15));
        let tip = rate.safe_mul(dec!(50)).unwrap();
        assert_eq!(*tip, dec!(7.50));
    }

    #[test]
    fn test_ceil_whole() {
        assert_eq!(*TipDecimal::new(dec!(7.50)).ceil_whole(), dec!(8));
        assert_eq!(*TipDecimal::new(dec!(8)).ceil_whole(), dec!(8));
        assert_eq!(*TipDecimal::new(dec!(0)).ceil_whole(), dec!(0));
        assert_eq!(*TipDecimal::new(dec!(0.01)).ceil_whole(), dec!(1));
    }

    #[test]
    fn test_overflow_carries_source() {
        let err = TipDecimal::new(Decimal::MAX)
            .with_source(Some("Dinner".to_string()))
            .safe_mul(dec!(2))
            .unwrap_err();
        match err {
            TipError::Overflow { source_label, .. } => {
                assert_eq!(source_label.as_deref(), Some("Dinner"));
            }
            other => panic!("Expected Overflow, got {:?}", other),
        }
    }
}
