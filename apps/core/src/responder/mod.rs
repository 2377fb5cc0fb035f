//! # Responder Module
//!
//! Deterministic, non-LLM answer engine for Tumbuh.
//! Maps a free-text question to a curated response bundle before any
//! rendering happens.
//!
//! ## Components
//! - `knowledge`: ordered keyword rule table (configuration data)
//! - `engine`: first-match scan and bundle assembly
//! - `response`: output data structures

pub mod engine;
pub mod knowledge;
pub mod response;

pub use engine::Responder;
pub use knowledge::{validate_rules, TopicRule};
pub use response::{ResolvedResponse, ResourceLink, Topic};
