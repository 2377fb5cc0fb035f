//! Localization Tests
//!
//! Exercises the catalog tables and the fallback policy shared by every
//! text source.

use crate::i18n::{Locale, MessageCatalog, TextSource, DEFAULT_LOCALE};

#[test]
fn test_default_locale_is_english() {
    assert_eq!(DEFAULT_LOCALE, Locale::English);
}

#[test]
fn test_all_locales_are_listed() {
    let all = Locale::all();
    assert_eq!(all.len(), 3);
    assert!(all.contains(&Locale::English));
    assert!(all.contains(&Locale::Arabic));
    assert!(all.contains(&Locale::Malay));
}

#[test]
fn test_responses_are_translated_not_copied() {
    let catalog = MessageCatalog::new();

    let english = catalog
        .resolve("response.emotions", Locale::English)
        .expect("english entry");
    let arabic = catalog
        .resolve("response.emotions", Locale::Arabic)
        .expect("arabic entry");
    let malay = catalog
        .resolve("response.emotions", Locale::Malay)
        .expect("malay entry");

    assert_ne!(english, arabic);
    assert_ne!(english, malay);
    assert_ne!(arabic, malay);
}

#[test]
fn test_resolve_with_fallback_prefers_requested_locale() {
    let catalog = MessageCatalog::new();

    let malay = catalog
        .resolve_with_fallback("resource.faq", Locale::Malay)
        .expect("faq label");
    assert_eq!(malay, "Soalan lazim");
}

#[test]
fn test_missing_key_falls_back_to_english() {
    // A source whose Malay table only knows one key.
    struct Sparse;
    impl TextSource for Sparse {
        fn resolve(&self, key: &str, locale: Locale) -> Option<&str> {
            match (key, locale) {
                ("greeting", Locale::Malay) => Some("hai"),
                ("greeting", Locale::English) => Some("hello"),
                ("farewell", Locale::English) => Some("goodbye"),
                _ => None,
            }
        }
    }

    let source = Sparse;
    assert_eq!(source.resolve_with_fallback("greeting", Locale::Malay), Some("hai"));
    assert_eq!(
        source.resolve_with_fallback("farewell", Locale::Malay),
        Some("goodbye")
    );
    assert_eq!(source.resolve_with_fallback("unknown", Locale::Malay), None);
}

#[test]
fn test_blank_values_count_as_misses() {
    struct Blanky;
    impl TextSource for Blanky {
        fn resolve(&self, key: &str, locale: Locale) -> Option<&str> {
            match (key, locale) {
                ("greeting", Locale::Arabic) => Some("   "),
                ("greeting", Locale::English) => Some("hello"),
                _ => None,
            }
        }
    }

    // The Arabic value is a placeholder; fallback must step over it.
    assert_eq!(
        Blanky.resolve_with_fallback("greeting", Locale::Arabic),
        Some("hello")
    );
}
