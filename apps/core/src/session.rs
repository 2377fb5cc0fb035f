//! Conversation session: owns the message history around the pure engine.
//!
//! The responder is a stateless function; everything that grows over time
//! (the message list, the active locale) lives here, mirroring the UI-side
//! ownership boundary.

use std::fs;
use std::path::Path;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::i18n::Locale;
use crate::models::{ChatRequest, ConversationMessage};
use crate::responder::Responder;

/// A single user-facing conversation.
pub struct ChatSession {
    id: String,
    locale: Locale,
    responder: Responder,
    messages: Vec<ConversationMessage>,
}

impl ChatSession {
    /// Create a session over the built-in responder.
    pub fn new(locale: Locale) -> Self {
        Self::with_responder(Responder::new(), locale)
    }

    /// Create a session over a custom responder.
    pub fn with_responder(responder: Responder, locale: Locale) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            locale,
            responder,
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the reply language for subsequent turns. Past messages keep
    /// the language they were produced in.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// The full conversation so far, oldest first.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Process one user turn: validate, record the user message, ask the
    /// engine, record and return the assistant message.
    pub fn submit(&mut self, input: &str) -> Result<&ConversationMessage, AppError> {
        let request = ChatRequest {
            message: input.to_string(),
        };
        request.validate()?;

        self.messages.push(ConversationMessage::user(request.message.as_str()));

        let response = self.responder.respond(&request.message, self.locale);
        self.messages.push(ConversationMessage::assistant(response));

        info!(
            session = %self.id,
            turns = self.messages.len() / 2,
            "message processed"
        );

        match self.messages.last() {
            Some(message) => Ok(message),
            None => Err(AppError::Internal(
                "message list empty after append".to_string(),
            )),
        }
    }

    /// Write the conversation to `path` as pretty-printed JSON.
    pub fn save_transcript(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(&self.messages)?;
        fs::write(path, json)?;
        info!(session = %self.id, path = %path.display(), "transcript saved");
        Ok(())
    }
}
