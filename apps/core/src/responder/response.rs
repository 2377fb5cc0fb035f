//! Output structures for one matching operation.
//!
//! A [`ResolvedResponse`] is built fresh per query and is immutable once
//! returned; nothing in here is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic identifier for a matched rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Bullying,
    Hygiene,
    Periods,
    Sleep,
    Nutrition,
    Emotions,
    Activities,
    Family,
    BodyChanges,
    /// Default bundle used when no rule matches.
    Fallback,
}

impl Topic {
    /// Returns a human-readable label for the topic.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Bullying => "bullying",
            Topic::Hygiene => "hygiene",
            Topic::Periods => "periods",
            Topic::Sleep => "sleep",
            Topic::Nutrition => "nutrition",
            Topic::Emotions => "emotions",
            Topic::Activities => "activities",
            Topic::Family => "family",
            Topic::BodyChanges => "body_changes",
            Topic::Fallback => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Navigational pointer into the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Localized display label.
    pub label: String,
    /// Stable route inside the application.
    pub href: String,
}

/// The structured reply bundle for one user query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedResponse {
    /// The topic that matched, or [`Topic::Fallback`].
    pub topic: Topic,
    /// Localized reply text. Never empty.
    pub content: String,
    /// Short advice strings attached to the reply, in display order.
    pub tips: Vec<String>,
    /// Related links attached to the reply, in display order.
    pub resources: Vec<ResourceLink>,
}
