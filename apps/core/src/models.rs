use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::responder::{ResolvedResponse, ResourceLink, Topic};

/// Inbound chat request, validated before it reaches the engine.
///
/// Empty input is accepted (the engine answers it with the fallback
/// bundle); only oversized messages are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    /// The user's latest message.
    #[validate(length(max = 2000))]
    pub message: String,
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message within a conversation.
///
/// The session owns the growing list; the engine never reads or mutates
/// conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The unique identifier for the message (UUID).
    pub id: String,
    /// Who produced the message.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
    /// Topic of the matched rule, assistant messages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
    /// Advice strings attached to an assistant message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    /// Related links attached to an assistant message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceLink>,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
}

impl ConversationMessage {
    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            topic: None,
            tips: Vec::new(),
            resources: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Build an assistant message from a resolved response bundle.
    pub fn assistant(response: ResolvedResponse) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: response.content,
            topic: Some(response.topic),
            tips: response.tips,
            resources: response.resources,
            created_at: Utc::now(),
        }
    }
}
