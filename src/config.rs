use serde::{Deserialize, Serialize};
use std::env;

use crate::i18n::TipLocale;
use crate::types::TipError;

/// Configuration for tip calculations.
///
/// Carries the host environment's active locale, which drives the currency
/// symbol, separators and fraction digits of every formatted result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipConfig {
    pub locale: TipLocale,
}

impl TipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: TipLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Attempts to load configuration from the environment.
    ///
    /// `GRATUITY_LOCALE` selects the locale (e.g. "en-US", "de-DE");
    /// an unset variable falls back to the default, an unparseable one
    /// is a configuration error.
    pub fn from_env() -> Result<Self, TipError> {
        match env::var("GRATUITY_LOCALE") {
            Ok(raw) => {
                let locale = raw.parse::<TipLocale>().map_err(|e| {
                    TipError::ConfigurationError { reason: e }
                })?;
                Ok(Self::default().with_locale(locale))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

impl std::str::FromStr for TipConfig {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| TipError::ConfigurationError {
            reason: format!("Failed to parse config JSON: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale() {
        let config = TipConfig::new();
        assert_eq!(config.locale, TipLocale::EnUs);
        assert_eq!(config.locale.currency_code(), "USD");
    }

    #[test]
    fn test_builder() {
        let config = TipConfig::new().with_locale(TipLocale::JaJp);
        assert_eq!(config.locale.currency_code(), "JPY");
    }

    #[test]
    fn test_from_json() {
        let config: TipConfig = r#"{"locale":"DeDe"}"#.parse().unwrap();
        assert_eq!(config.locale, TipLocale::DeDe);
        assert!("not json".parse::<TipConfig>().is_err());
    }
}
