//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Value is neither a known language code nor a language name
    #[error("Invalid language: {value:?}")]
    InvalidLanguage {
        /// Rejected input
        value: String,
    },

    /// Translate was called without any text
    #[error("No source text provided")]
    EmptyInput,

    /// Endpoint answered with a non-200 status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Details
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Details
        message: String,
    },

    /// Request URL could not be built
    #[error("Invalid request: {message}")]
    RequestError {
        /// Details
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Details
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Details
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl TranslationError {
    /// Short machine-readable code, used by the HTTP API
    pub fn code(&self) -> &'static str {
        match self {
            TranslationError::InvalidLanguage { .. } => "invalid_language",
            TranslationError::EmptyInput => "empty_input",
            TranslationError::ApiError { .. } => "upstream_status",
            TranslationError::NetworkError { .. } => "network_error",
            TranslationError::RequestError { .. } => "invalid_request",
            TranslationError::InvalidResponse { .. } => "parse_error",
            TranslationError::ConfigError { .. } => "config_error",
            TranslationError::InternalError(_)
            | TranslationError::IoError(_)
            | TranslationError::JsonError(_)
            | TranslationError::YamlError(_) => "internal_error",
        }
    }

    /// Whether the caller, not the endpoint, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TranslationError::InvalidLanguage { .. }
                | TranslationError::EmptyInput
                | TranslationError::RequestError { .. }
        )
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::InternalError(err.to_string())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
