use crate::types::TipError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Trait for converting various types into `Decimal` for tip calculations.
///
/// This trait allows users to pass `i32`, `f64`, `&str`, etc. directly into
/// constructors without needing to wrap them in `dec!()` or `Decimal::from()`.
pub trait IntoTipDecimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError>;
}

// Implement for Decimal (passthrough)
impl IntoTipDecimal for Decimal {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        Ok(self)
    }
}

// Implement for Integers
macro_rules! impl_into_tip_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_tip_decimal_int!(i32, u32, i64, u64, isize, usize);

// Implement for Floats
macro_rules! impl_into_tip_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoTipDecimal for $t {
                fn into_tip_decimal(self) -> Result<Decimal, TipError> {
                    Decimal::from_f64_retain(self as f64)
                        .ok_or_else(|| TipError::InvalidInput {
                            field: "amount".to_string(),
                            reason: format!("Invalid float value: {}", self),
                            source_label: None,
                        })
                }
            }
        )*
    };
}

impl_into_tip_decimal_float!(f32, f64);

// Implement for Strings
impl IntoTipDecimal for &str {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        Decimal::from_str(self.trim()).map_err(|e| TipError::InvalidInput {
            field: "amount".to_string(),
            reason: format!("Invalid string format: {}", e),
            source_label: None,
        })
    }
}

impl IntoTipDecimal for String {
    fn into_tip_decimal(self) -> Result<Decimal, TipError> {
        self.as_str().into_tip_decimal()
    }
}

/// Converts free-form text into an amount, defaulting to zero.
///
/// Empty or unparseable input yields `Decimal::ZERO`. This is the input
/// contract for UI text fields: no error, no message, no logging.
pub fn amount_or_zero(text: &str) -> Decimal {
    Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_or_zero_valid() {
        assert_eq!(amount_or_zero("50.00"), dec!(50.00));
        assert_eq!(amount_or_zero("  12.5 "), dec!(12.5));
    }

    #[test]
    fn test_amount_or_zero_defaults() {
        assert_eq!(amount_or_zero(""), Decimal::ZERO);
        assert_eq!(amount_or_zero("abc"), Decimal::ZERO);
        assert_eq!(amount_or_zero("12.3.4"), Decimal::ZERO);
    }

    #[test]
    fn test_into_tip_decimal_variants() {
        assert_eq!(42.into_tip_decimal().unwrap(), dec!(42));
        assert_eq!("19.99".into_tip_decimal().unwrap(), dec!(19.99));
        assert!(15.0f64.into_tip_decimal().is_ok());
        assert!("not a number".into_tip_decimal().is_err());
    }
}
