//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::languages::{language_name, AUTO};

/// Default output language when nothing else is configured
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "es";

/// Session options applied to every translate call until changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorOptions {
    /// Source language code, `auto` to let the endpoint detect it
    pub input_language: String,
    /// Target language code
    pub output_language: String,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            input_language: AUTO.to_string(),
            output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
        }
    }
}

impl fmt::Display for TranslatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input_language, self.output_language)
    }
}

/// Partial options; absent fields leave the current value alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsUpdate {
    /// New source language, code or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_language: Option<String>,
    /// New target language, code or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_language: Option<String>,
}

impl OptionsUpdate {
    /// Empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source language
    pub fn with_input_language(mut self, language: impl Into<String>) -> Self {
        self.input_language = Some(language.into());
        self
    }

    /// Set the target language
    pub fn with_output_language(mut self, language: impl Into<String>) -> Self {
        self.output_language = Some(language.into());
        self
    }

    /// True when neither field is set
    pub fn is_empty(&self) -> bool {
        self.input_language.is_none() && self.output_language.is_none()
    }
}

/// One completed translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Source language the request was sent with
    pub input_language: String,
    /// Target language the request was sent with
    pub output_language: String,
    /// Text as given by the caller
    pub input_text: String,
    /// Concatenated translation
    pub output_text: String,
    /// Source language reported by the endpoint, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    /// When the translation completed
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Translation {
    /// Record a translation made with `options`
    pub fn new(
        options: &TranslatorOptions,
        input_text: impl Into<String>,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            input_language: options.input_language.clone(),
            output_language: options.output_language.clone(),
            input_text: input_text.into(),
            output_text: output_text.into(),
            detected_language: None,
            created_at: chrono::Utc::now(),
        }
    }

    /// Attach the language reported by the endpoint
    pub fn with_detected_language(mut self, language: Option<String>) -> Self {
        self.detected_language = language;
        self
    }

    /// Human-readable source language, preferring the detected one
    pub fn source_language_name(&self) -> Option<&'static str> {
        let code = match (&self.detected_language, self.input_language.as_str()) {
            (Some(detected), AUTO) => detected.as_str(),
            _ => self.input_language.as_str(),
        };
        language_name(&code.to_lowercase())
    }
}
