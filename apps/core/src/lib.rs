//! # tumbuh-core
//!
//! Knowledge-based responder engine for the Tumbuh education companion.
//!
//! Given a free-text question, the engine scans an ordered keyword table
//! and returns a localized bundle of reply text, tips and related links,
//! falling back to a default bundle when nothing matches. The surrounding
//! UI owns rendering and conversation history; [`session::ChatSession`]
//! models that boundary in-process.

pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod responder;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use error::AppError;
pub use i18n::{Locale, MessageCatalog, TextSource, DEFAULT_LOCALE};
pub use models::{ChatRequest, ConversationMessage, Role};
pub use responder::{ResolvedResponse, Responder, ResourceLink, Topic, TopicRule};
pub use session::ChatSession;
