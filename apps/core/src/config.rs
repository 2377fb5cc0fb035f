//! Environment-backed runtime configuration.

use std::env;

use tracing::warn;

use crate::error::AppError;
use crate::i18n::{Locale, DEFAULT_LOCALE};

/// Environment variable selecting the reply language ("en", "ar", "ms").
pub const LOCALE_ENV: &str = "TUMBUH_LOCALE";
/// Environment variable for the presentational delay before replies, in milliseconds.
pub const THINKING_DELAY_ENV: &str = "TUMBUH_THINKING_DELAY_MS";

const DEFAULT_THINKING_DELAY_MS: u64 = 600;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Language used for replies until changed in-session.
    pub locale: Locale,
    /// Delay before a reply is shown. Presentation only; the engine itself
    /// answers immediately.
    pub thinking_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// An unknown locale code warns and falls back to English; a
    /// non-numeric delay is a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        let locale = match env::var(LOCALE_ENV) {
            Ok(code) => match Locale::from_code(&code) {
                Some(locale) => locale,
                None => {
                    warn!(code = %code, "unknown locale code, using default");
                    DEFAULT_LOCALE
                }
            },
            Err(_) => DEFAULT_LOCALE,
        };

        let thinking_delay_ms = match env::var(THINKING_DELAY_ENV) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("{} must be an integer: {}", THINKING_DELAY_ENV, e))
            })?,
            Err(_) => DEFAULT_THINKING_DELAY_MS,
        };

        Ok(Self {
            locale,
            thinking_delay_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset([LOCALE_ENV, THINKING_DELAY_ENV], || {
            let config = AppConfig::from_env().expect("defaults must load");
            assert_eq!(config.locale, Locale::English);
            assert_eq!(config.thinking_delay_ms, DEFAULT_THINKING_DELAY_MS);
        });
    }

    #[test]
    fn test_locale_from_env() {
        temp_env::with_var(LOCALE_ENV, Some("ms"), || {
            let config = AppConfig::from_env().expect("config must load");
            assert_eq!(config.locale, Locale::Malay);
        });
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        temp_env::with_var(LOCALE_ENV, Some("klingon"), || {
            let config = AppConfig::from_env().expect("config must load");
            assert_eq!(config.locale, Locale::English);
        });
    }

    #[test]
    fn test_bad_delay_is_config_error() {
        temp_env::with_var(THINKING_DELAY_ENV, Some("soon"), || {
            let err = AppConfig::from_env().expect_err("bad delay must fail");
            assert!(matches!(err, AppError::Config(_)));
        });
    }
}
