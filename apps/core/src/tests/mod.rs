//! Test Module
//!
//! Integration-level test suite for the tumbuh engine.
//!
//! ## Test Categories
//! - `responder_tests`: matching order, fallback behavior, localized assembly
//! - `i18n_tests`: catalog tables and locale fallback
//! - `session_tests`: history ownership, validation, transcript export

pub mod i18n_tests;
pub mod session_tests;
