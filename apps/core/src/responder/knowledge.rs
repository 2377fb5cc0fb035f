//! Static knowledge table: ordered keyword rules for the education domain.
//!
//! Rules are scanned first to last and the first match wins, so the table
//! is curated with the more specific topics above the broader ones:
//! "bullying" must stay above "emotions" or its queries would be shadowed
//! by generic feeling words. Keywords are lowercase substrings; matching
//! is not word-boundary aware.

use super::response::Topic;
use crate::error::AppError;

/// A single rule mapping trigger substrings to a canned response bundle.
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub topic: Topic,
    /// Lowercase substrings that trigger this rule.
    pub keywords: &'static [&'static str],
    /// Catalog key of the reply text.
    pub response_key: &'static str,
    /// Catalog keys of the attached tips, in display order.
    pub tip_keys: &'static [&'static str],
    /// Resource ids resolved to label/href pairs, in display order.
    pub resource_ids: &'static [&'static str],
}

/// The built-in rule table, in priority order.
pub const RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Bullying,
        keywords: &["bully", "bullied", "bullying", "teased", "teasing", "unsafe", "picked on"],
        response_key: "response.bullying",
        tip_keys: &[
            "tip.bullying.tell-adult",
            "tip.bullying.stay-together",
            "tip.bullying.not-your-fault",
        ],
        resource_ids: &["parents", "faq"],
    },
    TopicRule {
        topic: Topic::Hygiene,
        keywords: &[
            "hygiene", "odor", "odour", "smell", "sweat", "shower", "deodorant", "acne",
            "pimple", "wash",
        ],
        response_key: "response.hygiene",
        tip_keys: &[
            "tip.hygiene.shower",
            "tip.hygiene.deodorant",
            "tip.hygiene.clean-clothes",
        ],
        resource_ids: &["tips", "habit-tracker"],
    },
    TopicRule {
        topic: Topic::Periods,
        keywords: &["period", "menstrua", "cycle", "cramp", "pad"],
        response_key: "response.periods",
        tip_keys: &["tip.periods.track", "tip.periods.supplies", "tip.periods.normal"],
        resource_ids: &["body-changes", "faq"],
    },
    TopicRule {
        topic: Topic::Sleep,
        keywords: &["sleep", "tired", "insomnia", "bedtime", "nap"],
        response_key: "response.sleep",
        tip_keys: &["tip.sleep.routine", "tip.sleep.screens", "tip.sleep.hours"],
        resource_ids: &["habit-tracker", "tips"],
    },
    TopicRule {
        topic: Topic::Nutrition,
        keywords: &["food", "eat", "diet", "nutrition", "hungry", "snack", "meal"],
        response_key: "response.nutrition",
        tip_keys: &[
            "tip.nutrition.balanced",
            "tip.nutrition.water",
            "tip.nutrition.breakfast",
        ],
        resource_ids: &["tips", "habit-tracker"],
    },
    TopicRule {
        topic: Topic::Emotions,
        keywords: &[
            "mood", "feel", "emotion", "angry", "sad", "cry", "stress", "anxious",
            "worried", "upset",
        ],
        response_key: "response.emotions",
        tip_keys: &[
            "tip.emotions.name-it",
            "tip.emotions.breathe",
            "tip.emotions.diary",
        ],
        resource_ids: &["mood-diary", "faq"],
    },
    TopicRule {
        topic: Topic::Activities,
        keywords: &[
            "game", "play", "activity", "activities", "bored", "hobby", "exercise", "sport",
        ],
        response_key: "response.activities",
        tip_keys: &["tip.activities.move", "tip.activities.friends"],
        resource_ids: &["games"],
    },
    TopicRule {
        topic: Topic::Family,
        keywords: &["parent", "mom", "mum", "dad", "talk", "ask", "embarrass", "awkward", "shy"],
        response_key: "response.family",
        tip_keys: &["tip.family.pick-moment", "tip.family.write-first"],
        resource_ids: &["parents"],
    },
    TopicRule {
        topic: Topic::BodyChanges,
        keywords: &[
            "puberty", "body changes", "growing", "change", "height", "voice", "hair",
        ],
        response_key: "response.body",
        tip_keys: &["tip.body.everyone-different", "tip.body.ask-questions"],
        resource_ids: &["body-changes", "faq"],
    },
];

/// The default bundle returned when no rule matches. Distinct from every
/// topical rule; its keyword list is empty because it is never scanned.
pub const FALLBACK_RULE: TopicRule = TopicRule {
    topic: Topic::Fallback,
    keywords: &[],
    response_key: "response.fallback",
    tip_keys: &["tip.fallback.rephrase", "tip.fallback.explore"],
    resource_ids: &["faq", "games"],
};

/// Routes for resource ids. Labels come from the catalog (`resource.<id>`).
pub(super) const RESOURCE_ROUTES: &[(&str, &str)] = &[
    ("faq", "/faq"),
    ("games", "/games"),
    ("mood-diary", "/mood-diary"),
    ("habit-tracker", "/habit-tracker"),
    ("body-changes", "/body-changes"),
    ("parents", "/parents"),
    ("tips", "/tips"),
];

pub(super) fn route_for(resource_id: &str) -> Option<&'static str> {
    RESOURCE_ROUTES
        .iter()
        .find(|(id, _)| *id == resource_id)
        .map(|(_, route)| *route)
}

/// Structural validation for caller-supplied rule tables.
///
/// Keywords must be non-empty and already lowercase (matching normalizes
/// the input only), and every rule needs a response key.
pub fn validate_rules(rules: &[TopicRule]) -> Result<(), AppError> {
    for rule in rules {
        if rule.keywords.is_empty() {
            return Err(AppError::Validation(format!(
                "rule '{}' has no keywords",
                rule.topic
            )));
        }
        for keyword in rule.keywords {
            if keyword.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "rule '{}' contains a blank keyword",
                    rule.topic
                )));
            }
            if keyword.to_lowercase() != **keyword {
                return Err(AppError::Validation(format!(
                    "rule '{}' keyword '{}' is not lowercase",
                    rule.topic, keyword
                )));
            }
        }
        if rule.response_key.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "rule '{}' has an empty response key",
                rule.topic
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, MessageCatalog, TextSource};

    #[test]
    fn test_builtin_rules_are_valid() {
        validate_rules(RULES).expect("built-in table must pass validation");
    }

    #[test]
    fn test_every_key_exists_in_english_catalog() {
        // Catches typos between the rule table and the message tables.
        let catalog = MessageCatalog::new();
        for rule in RULES.iter().chain(std::iter::once(&FALLBACK_RULE)) {
            assert!(
                catalog.resolve(rule.response_key, Locale::English).is_some(),
                "missing catalog entry for {}",
                rule.response_key
            );
            for key in rule.tip_keys {
                assert!(
                    catalog.resolve(key, Locale::English).is_some(),
                    "missing catalog entry for {}",
                    key
                );
            }
            for id in rule.resource_ids {
                let label_key = format!("resource.{}", id);
                assert!(
                    catalog.resolve(&label_key, Locale::English).is_some(),
                    "missing catalog entry for {}",
                    label_key
                );
                assert!(route_for(id).is_some(), "missing route for resource '{}'", id);
            }
        }
    }

    #[test]
    fn test_validation_rejects_uppercase_keywords() {
        const BAD: &[TopicRule] = &[TopicRule {
            topic: Topic::Hygiene,
            keywords: &["Shower"],
            response_key: "response.hygiene",
            tip_keys: &[],
            resource_ids: &[],
        }];

        let err = validate_rules(BAD).expect_err("uppercase keyword must be rejected");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validation_rejects_empty_keyword_list() {
        const BAD: &[TopicRule] = &[TopicRule {
            topic: Topic::Sleep,
            keywords: &[],
            response_key: "response.sleep",
            tip_keys: &[],
            resource_ids: &[],
        }];

        assert!(validate_rules(BAD).is_err());
    }
}
