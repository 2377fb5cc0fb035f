//! Localization support: locale identifiers and the message catalog.
//!
//! The engine never reads ambient language state. Every lookup takes an
//! explicit [`Locale`], and missing keys fall back to English instead of
//! failing. Message content lives in `messages.rs`.

mod messages;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use messages::{MESSAGES_AR, MESSAGES_EN, MESSAGES_MS};

/// Locale used when a key is missing from the requested locale's table.
pub const DEFAULT_LOCALE: Locale = Locale::English;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    English,
    Arabic,
    Malay,
}

impl Locale {
    /// Returns the BCP 47 primary language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
            Locale::Malay => "ms",
        }
    }

    /// Parses a language code, tolerating case, whitespace and region
    /// subtags ("en-US" parses as English). Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Locale> {
        let normalized = code.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Locale::English),
            "ar" => Some(Locale::Arabic),
            "ms" => Some(Locale::Malay),
            _ => None,
        }
    }

    /// All supported locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Arabic, Locale::Malay]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Source of localized strings, injected into the responder.
///
/// Implementations must never panic on unknown keys; they report misses
/// with `None` and leave the fallback policy to the caller.
pub trait TextSource: Send + Sync {
    /// Look up a message key in the given locale's table.
    fn resolve(&self, key: &str, locale: Locale) -> Option<&str>;

    /// Look up a key, falling back to [`DEFAULT_LOCALE`] when the requested
    /// locale misses it. Empty or whitespace-only values count as misses.
    fn resolve_with_fallback(&self, key: &str, locale: Locale) -> Option<&str> {
        match self.resolve(key, locale) {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ if locale != DEFAULT_LOCALE => self
                .resolve(key, DEFAULT_LOCALE)
                .filter(|value| !value.trim().is_empty()),
            _ => None,
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

fn merged_table(overlay: &[(&'static str, &'static str)]) -> Table {
    let mut table: Table = MESSAGES_EN.iter().copied().collect();
    for (key, value) in overlay.iter().copied() {
        table.insert(key, value);
    }
    table
}

// Built once; the overlays are merged over the English base so a partial
// translation still yields a complete table.
static TABLE_EN: LazyLock<Table> = LazyLock::new(|| MESSAGES_EN.iter().copied().collect());
static TABLE_AR: LazyLock<Table> = LazyLock::new(|| merged_table(MESSAGES_AR));
static TABLE_MS: LazyLock<Table> = LazyLock::new(|| merged_table(MESSAGES_MS));

/// Built-in message catalog backed by the static tables in `messages.rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCatalog;

impl MessageCatalog {
    pub fn new() -> Self {
        Self
    }

    fn table(locale: Locale) -> &'static Table {
        match locale {
            Locale::English => &TABLE_EN,
            Locale::Arabic => &TABLE_AR,
            Locale::Malay => &TABLE_MS,
        }
    }
}

impl TextSource for MessageCatalog {
    fn resolve(&self, key: &str, locale: Locale) -> Option<&str> {
        Self::table(locale).get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::English.code(), "en");
        assert_eq!(Locale::Arabic.code(), "ar");
        assert_eq!(Locale::Malay.code(), "ms");
    }

    #[test]
    fn test_from_code_tolerates_variants() {
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code(" AR "), Some(Locale::Arabic));
        assert_eq!(Locale::from_code("ms_MY"), Some(Locale::Malay));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::English));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_catalog_resolves_in_every_locale() {
        let catalog = MessageCatalog::new();
        for locale in Locale::all() {
            let value = catalog.resolve("response.hygiene", *locale);
            assert!(value.is_some(), "missing response.hygiene for {}", locale);
        }
    }

    #[test]
    fn test_unknown_key_is_a_miss_not_a_panic() {
        let catalog = MessageCatalog::new();
        assert_eq!(catalog.resolve("no.such.key", Locale::English), None);
        assert_eq!(
            catalog.resolve_with_fallback("no.such.key", Locale::Malay),
            None
        );
    }
}
