//! GTX Translator - lightweight client for the public Google translate endpoint
//!
//! This library validates language codes against a static table, keeps
//! per-session input/output languages, sends text to the `gtx` endpoint and
//! records every successful translation in memory. A CLI and a small HTTP API
//! are built on top of it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use self::core::{
    client::{build_request_url, parse_translation_body, Translator},
    config::TranslatorConfig,
    errors::{Result, TranslationError},
    languages::{check_language_code, language_name, languages},
    models::{OptionsUpdate, Translation, TranslatorOptions},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
