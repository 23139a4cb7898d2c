//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::core::languages::{check_language_code, is_valid_target, AUTO};
use crate::core::models::{TranslatorOptions, DEFAULT_OUTPUT_LANGUAGE};

/// Public endpoint used by the `gtx` web client
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Translation endpoint URL
    pub endpoint: String,
    /// HTTP request timeout in milliseconds
    pub timeout_ms: u64,
    /// Initial source language, code or name
    pub input_language: String,
    /// Initial target language, code or name
    pub output_language: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 30000,
            input_language: AUTO.to_string(),
            output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("TRANSLATE_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_MS") {
            config.timeout_ms = timeout.parse::<u64>()?;
        }

        if let Ok(language) = std::env::var("INPUT_LANGUAGE") {
            config.input_language = language;
        }

        if let Ok(language) = std::env::var("OUTPUT_LANGUAGE") {
            config.output_language = language;
        }

        debug!("Loaded configuration from environment: {:?}", config);
        Ok(config)
    }

    /// Load from a JSON or YAML file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            return Err(anyhow::anyhow!("endpoint is required"));
        }

        reqwest::Url::parse(&self.endpoint)
            .map_err(|e| anyhow::anyhow!("endpoint {:?} is not a valid URL: {}", self.endpoint, e))?;

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if check_language_code(&self.input_language).is_none() {
            return Err(anyhow::anyhow!("unknown input language: {}", self.input_language));
        }

        match check_language_code(&self.output_language) {
            Some(code) if is_valid_target(code) => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "unusable output language: {}",
                    self.output_language
                ))
            }
        }

        Ok(())
    }

    /// Initial session options, with names resolved to canonical codes
    pub fn options(&self) -> anyhow::Result<TranslatorOptions> {
        self.validate()?;
        let input = check_language_code(&self.input_language).unwrap_or(AUTO);
        let output = check_language_code(&self.output_language).unwrap_or(DEFAULT_OUTPUT_LANGUAGE);
        Ok(TranslatorOptions {
            input_language: input.to_string(),
            output_language: output.to_string(),
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.options().unwrap(), TranslatorOptions::default());
    }

    #[test]
    fn test_config_validation_bad_endpoint() {
        let config = TranslatorConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_languages() {
        let config = TranslatorConfig {
            output_language: "auto".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            input_language: "Klingon".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_options_resolve_names() {
        let config = TranslatorConfig {
            input_language: "English".to_string(),
            output_language: "FRENCH".to_string(),
            ..Default::default()
        };
        let options = config.options().unwrap();
        assert_eq!(options.input_language, "en");
        assert_eq!(options.output_language, "fr");
    }

    #[test]
    fn test_file_round_trip_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let config = TranslatorConfig {
            endpoint: "http://127.0.0.1:9/single".to_string(),
            timeout_ms: 500,
            ..Default::default()
        };

        let json_path = dir.path().join("translator.json");
        config.to_file(&json_path).unwrap();
        assert_eq!(TranslatorConfig::from_file(&json_path).unwrap(), config);

        let yaml_path = dir.path().join("translator.yaml");
        config.to_file(&yaml_path).unwrap();
        assert_eq!(TranslatorConfig::from_file(&yaml_path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.yml");
        std::fs::write(&path, "output_language: de\n").unwrap();

        let config = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(config.output_language, "de");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_ms, 30000);
    }
}
