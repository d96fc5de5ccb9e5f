use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use fixed_decimal::FixedDecimal;
use icu::decimal::{FixedDecimalFormatter, options::FixedDecimalFormatterOptions};
use icu::locid::Locale;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use writeable::Writeable;

/// Supported locales for currency rendering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum TipLocale {
    #[default]
    EnUs,
    DeDe,
    JaJp,
}

impl TipLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipLocale::EnUs => "en-US",
            TipLocale::DeDe => "de-DE",
            TipLocale::JaJp => "ja-JP",
        }
    }

    pub fn to_icu_locale(&self) -> Locale {
        self.as_str().parse().expect("Valid BCP-47 locale")
    }

    pub fn currency_code(&self) -> &'static str {
        match self {
            TipLocale::EnUs => "USD",
            TipLocale::DeDe => "EUR",
            TipLocale::JaJp => "JPY",
        }
    }

    /// Number of fraction digits for the locale's currency.
    /// JPY is a zero-decimal currency.
    pub fn fraction_digits(&self) -> u32 {
        match self {
            TipLocale::EnUs | TipLocale::DeDe => 2,
            TipLocale::JaJp => 0,
        }
    }

    /// Cycles to the next supported locale. Used by front ends that let
    /// the user flip through locales with a single key.
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl FromStr for TipLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" | "en" => Ok(TipLocale::EnUs),
            "de-DE" | "de" => Ok(TipLocale::DeDe),
            "ja-JP" | "ja" => Ok(TipLocale::JaJp),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Trait for formatting usage.
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
}

impl CurrencyFormatter for TipLocale {
    fn format_currency(&self, amount: Decimal) -> String {
        let locale = self.to_icu_locale();

        let options = FixedDecimalFormatterOptions::default();
        let formatter = FixedDecimalFormatter::try_new(&locale.into(), options)
            .expect("Failed to create ICU formatter with compiled data");

        // Pin the scale to the currency's fraction digits so "7.5" renders
        // as "7.50" (USD/EUR) and JPY stays whole.
        let mut scaled = amount
            .round_dp_with_strategy(self.fraction_digits(), RoundingStrategy::MidpointAwayFromZero);
        scaled.rescale(self.fraction_digits());

        let fixed = FixedDecimal::from_str(&scaled.to_string())
            .unwrap_or_else(|_| FixedDecimal::from(0));

        let formatted_number = formatter.format(&fixed);
        let number_str = formatted_number.write_to_string().into_owned();

        // Manual fallback for currency symbols
        match self {
            TipLocale::EnUs => format!("${}", number_str),
            TipLocale::DeDe => format!("{} €", number_str),
            TipLocale::JaJp => format!("¥{}", number_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_formatting() {
        let amount = dec!(1234.56);

        // Test EnUs
        let us = TipLocale::EnUs;
        let res_us = us.format_currency(amount);
        println!("EnUs: {}", res_us);
        assert!(res_us.contains("$"));
        assert!(res_us.contains("1,234.56"));

        // Test DeDe
        let de = TipLocale::DeDe;
        let res_de = de.format_currency(amount).replace('\u{00A0}', " ");
        println!("DeDe: {}", res_de);
        assert!(res_de.contains("€"));
        assert!(res_de.contains("1.234,56"));

        // Test JaJp - zero-decimal currency, rounds to whole yen
        let ja = TipLocale::JaJp;
        let res_ja = ja.format_currency(amount);
        println!("JaJp: {}", res_ja);
        assert!(res_ja.contains("¥"));
        assert!(res_ja.contains("1,235"));
    }

    #[test]
    fn test_scale_is_pinned() {
        assert_eq!(TipLocale::EnUs.format_currency(dec!(7.5)), "$7.50");
        assert_eq!(TipLocale::EnUs.format_currency(dec!(8)), "$8.00");
        assert_eq!(TipLocale::EnUs.format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(TipLocale::JaJp.format_currency(dec!(8)), "¥8");
    }

    #[test]
    fn test_locale_cycling() {
        assert_eq!(TipLocale::EnUs.next(), TipLocale::DeDe);
        assert_eq!(TipLocale::DeDe.next(), TipLocale::JaJp);
        assert_eq!(TipLocale::JaJp.next(), TipLocale::EnUs);
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en-US".parse::<TipLocale>().unwrap(), TipLocale::EnUs);
        assert_eq!("ja".parse::<TipLocale>().unwrap(), TipLocale::JaJp);
        assert!("xx-XX".parse::<TipLocale>().is_err());
    }
}
