//! The matching engine: first-match keyword scan plus bundle assembly.
//!
//! `respond` is a pure function of its arguments. It never fails: missing
//! translations degrade to the English table, a fully broken catalog
//! degrades to a built-in reply, and input that matches nothing gets the
//! fallback bundle.

use std::time::Instant;
use tracing::debug;

use super::knowledge::{self, TopicRule, FALLBACK_RULE, RULES};
use super::response::{ResolvedResponse, ResourceLink};
use crate::error::AppError;
use crate::i18n::{Locale, MessageCatalog, TextSource};

/// Last-resort reply for a catalog that cannot produce any content.
const BUILTIN_FALLBACK_CONTENT: &str = "I'm here to help. Try asking about body changes, \
     feelings, hygiene, sleep, or staying active.";

/// Knowledge-based responder.
///
/// Holds the immutable rule table and the injected text source. Calls are
/// independent and stateless; the same input and locale always produce the
/// same bundle.
pub struct Responder {
    rules: &'static [TopicRule],
    fallback: &'static TopicRule,
    catalog: Box<dyn TextSource>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Create a responder over the built-in knowledge table and catalog.
    pub fn new() -> Self {
        Self::with_catalog(MessageCatalog::new())
    }

    /// Create a responder with a custom text source over the built-in table.
    pub fn with_catalog(catalog: impl TextSource + 'static) -> Self {
        Self {
            rules: RULES,
            fallback: &FALLBACK_RULE,
            catalog: Box::new(catalog),
        }
    }

    /// Create a responder over a caller-supplied rule table.
    ///
    /// The table is validated structurally; rule ordering is the caller's
    /// responsibility, as earlier rules shadow later ones.
    pub fn with_rules(
        rules: &'static [TopicRule],
        catalog: impl TextSource + 'static,
    ) -> Result<Self, AppError> {
        knowledge::validate_rules(rules)?;
        Ok(Self {
            rules,
            fallback: &FALLBACK_RULE,
            catalog: Box::new(catalog),
        })
    }

    /// Map a free-text query to a response bundle.
    ///
    /// The input is lowercased, the rule table is scanned in order, and the
    /// first rule with any keyword appearing as a substring wins. Later
    /// matches are ignored entirely. No match yields the fallback bundle.
    pub fn respond(&self, input: &str, locale: Locale) -> ResolvedResponse {
        let start = Instant::now();
        let normalized = input.to_lowercase();

        let rule = self.match_rule(&normalized).unwrap_or(self.fallback);
        let response = self.assemble(rule, locale);

        debug!(
            topic = %rule.topic,
            locale = %locale,
            elapsed_us = start.elapsed().as_micros() as u64,
            "query matched"
        );

        response
    }

    fn match_rule(&self, normalized: &str) -> Option<&TopicRule> {
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| normalized.contains(keyword)))
    }

    fn assemble(&self, rule: &TopicRule, locale: Locale) -> ResolvedResponse {
        let content = self
            .catalog
            .resolve_with_fallback(rule.response_key, locale)
            .or_else(|| {
                // The topical reply is missing everywhere; borrow the
                // fallback bundle's text so the user still sees an answer.
                self.catalog
                    .resolve_with_fallback(self.fallback.response_key, locale)
            })
            .unwrap_or(BUILTIN_FALLBACK_CONTENT)
            .to_string();

        let tips: Vec<String> = rule
            .tip_keys
            .iter()
            .filter_map(|key| self.catalog.resolve_with_fallback(key, locale))
            .map(str::to_string)
            .collect();

        let resources: Vec<ResourceLink> = rule
            .resource_ids
            .iter()
            .filter_map(|id| self.resource_link(id, locale))
            .collect();

        ResolvedResponse {
            topic: rule.topic,
            content,
            tips,
            resources,
        }
    }

    fn resource_link(&self, resource_id: &str, locale: Locale) -> Option<ResourceLink> {
        let Some(href) = knowledge::route_for(resource_id) else {
            debug!(resource_id, "no route for resource id, dropping link");
            return None;
        };

        let label_key = format!("resource.{}", resource_id);
        let label = self.catalog.resolve_with_fallback(&label_key, locale)?;

        Some(ResourceLink {
            label: label.to_string(),
            href: href.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::response::Topic;

    #[test]
    fn test_match_and_fallback_smoke() {
        let responder = Responder::new();

        let matched = responder.respond("tell me about puberty", Locale::English);
        assert_eq!(matched.topic, Topic::BodyChanges);
        assert!(!matched.content.is_empty());

        let fallback = responder.respond("qwerty", Locale::English);
        assert_eq!(fallback.topic, Topic::Fallback);
        assert!(!fallback.content.is_empty());
    }

    #[test]
    fn test_broken_catalog_still_yields_content() {
        struct EmptyCatalog;
        impl TextSource for EmptyCatalog {
            fn resolve(&self, _key: &str, _locale: Locale) -> Option<&str> {
                None
            }
        }

        let responder = Responder::with_catalog(EmptyCatalog);
        let response = responder.respond("puberty", Locale::Malay);

        assert!(!response.content.is_empty());
        assert!(response.tips.is_empty());
        assert!(response.resources.is_empty());
    }
}
