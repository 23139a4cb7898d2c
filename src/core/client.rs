//! Async translation client backed by the public `gtx` endpoint

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::history::TranslationLog;
use crate::core::languages::{self, is_valid_target};
use crate::core::models::{OptionsUpdate, Translation, TranslatorOptions};

/// Text and detected language extracted from an endpoint response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Concatenated fragments
    pub text: String,
    /// Source language reported at position `[2]`
    pub detected_language: Option<String>,
}

/// Translator holding session options and a log of completed translations.
///
/// Clones share options and log; separately constructed translators never do.
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
    options: Arc<RwLock<TranslatorOptions>>,
    log: TranslationLog,
}

impl Translator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let options = config
            .options()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        debug!("Translator created for {} ({})", config.endpoint, options);

        Ok(Self {
            client,
            config: Arc::new(config),
            options: Arc::new(RwLock::new(options)),
            log: TranslationLog::new(),
        })
    }

    /// Create with initial options applied on top of the configured languages
    pub async fn with_options(config: TranslatorConfig, update: &OptionsUpdate) -> Result<Self> {
        let translator = Self::new(config)?;
        translator.set_options(update).await;
        Ok(translator)
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Resolve a language code or name; see [`languages::check_language_code`]
    pub fn check_language_code(&self, target: &str) -> Option<&'static str> {
        languages::check_language_code(target)
    }

    /// Set the input language. Retained until changed.
    pub async fn set_input_language(&self, language: &str) -> Result<&'static str> {
        let code = languages::check_language_code(language).ok_or_else(|| {
            TranslationError::InvalidLanguage {
                value: language.to_string(),
            }
        })?;

        self.options.write().await.input_language = code.to_string();
        debug!("Input language set to {}", code);
        Ok(code)
    }

    /// Set the output language. Retained until changed.
    pub async fn set_output_language(&self, language: &str) -> Result<&'static str> {
        let code = languages::check_language_code(language)
            .filter(|code| is_valid_target(code))
            .ok_or_else(|| TranslationError::InvalidLanguage {
                value: language.to_string(),
            })?;

        self.options.write().await.output_language = code.to_string();
        debug!("Output language set to {}", code);
        Ok(code)
    }

    /// Apply the fields present in `update`; invalid ones are skipped.
    ///
    /// Returns the resulting options.
    pub async fn set_options(&self, update: &OptionsUpdate) -> TranslatorOptions {
        if let Some(language) = &update.input_language {
            if let Err(e) = self.set_input_language(language).await {
                warn!("Ignoring input language: {}", e);
            }
        }

        if let Some(language) = &update.output_language {
            if let Err(e) = self.set_output_language(language).await {
                warn!("Ignoring output language: {}", e);
            }
        }

        self.options().await
    }

    /// Current session options
    pub async fn options(&self) -> TranslatorOptions {
        self.options.read().await.clone()
    }

    /// All past results, oldest first
    pub async fn translations(&self) -> Vec<Translation> {
        self.log.all().await
    }

    /// Number of past results
    pub async fn count(&self) -> usize {
        self.log.len().await
    }

    /// Reset the store of past translations. Unrecoverable.
    ///
    /// Returns how many translations were dropped.
    pub async fn clear(&self) -> usize {
        self.log.clear().await
    }

    /// Most recent translation
    pub async fn latest(&self) -> Option<Translation> {
        self.log.latest().await
    }

    /// Translate `text` with the current options.
    ///
    /// When `update` is given it is applied first and retained, like
    /// [`Translator::set_options`]. Only a successful call is recorded.
    pub async fn translate(
        &self,
        text: &str,
        update: Option<&OptionsUpdate>,
    ) -> Result<Translation> {
        if let Some(update) = update {
            self.set_options(update).await;
        }

        if text.is_empty() {
            warn!("Provide valid source text");
            return Err(TranslationError::EmptyInput);
        }

        let options = self.options().await;
        let url = build_request_url(&self.config.endpoint, &options, text)?;
        debug!("Translating {} chars ({})", text.chars().count(), options);

        let body = self.send_request(url).await?;
        let parsed = parse_translation_body(&body).map_err(|e| {
            warn!("Translation error: {}", e);
            e
        })?;

        let translation = Translation::new(&options, text, parsed.text)
            .with_detected_language(parsed.detected_language);
        self.log.push(translation.clone()).await;

        Ok(translation)
    }

    /// Issue a translation on the runtime without waiting for it.
    ///
    /// Dropping the handle does not abort the request; the result is still
    /// recorded on success.
    pub fn spawn_translate(&self, text: impl Into<String>) -> JoinHandle<Result<Translation>> {
        let translator = self.clone();
        let text = text.into();
        tokio::spawn(async move { translator.translate(&text, None).await })
    }

    /// Translate several texts one after another
    pub async fn translate_batch<I, S>(&self, texts: I) -> Vec<Result<Translation>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = Vec::new();

        for text in texts {
            results.push(self.translate(text.as_ref(), None).await);
        }

        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        info!("Batch finished: {}/{} translated", succeeded, results.len());

        results
    }

    /// Send the GET request and return the body of a 200 response
    async fn send_request(&self, url: reqwest::Url) -> Result<String> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Translation error: {}", e);
            TranslationError::NetworkError {
                message: e.to_string(),
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::OK {
            response
                .text()
                .await
                .map_err(|e| TranslationError::NetworkError {
                    message: e.to_string(),
                })
        } else {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("Translation error: status {}", status_code);

            Err(TranslationError::ApiError {
                status: status_code,
                message,
            })
        }
    }
}

/// Build the `gtx` request URL for `text` with the given language pair
pub fn build_request_url(
    endpoint: &str,
    options: &TranslatorOptions,
    text: &str,
) -> Result<reqwest::Url> {
    reqwest::Url::parse_with_params(
        endpoint,
        &[
            ("client", "gtx"),
            ("sl", options.input_language.as_str()),
            ("tl", options.output_language.as_str()),
            ("dt", "t"),
            ("q", text),
        ],
    )
    .map_err(|e| TranslationError::RequestError {
        message: format!("{}: {}", endpoint, e),
    })
}

/// Extract the translated text from an endpoint response body.
///
/// The body is a JSON array whose first element lists segments; the first
/// element of each segment is a text fragment. A `null` segment list means
/// the endpoint had nothing to translate.
pub fn parse_translation_body(body: &str) -> Result<ParsedResponse> {
    let invalid = |message: &str| TranslationError::InvalidResponse {
        message: message.to_string(),
    };

    let value: Value = serde_json::from_str(body).map_err(|e| TranslationError::InvalidResponse {
        message: e.to_string(),
    })?;

    let root = value
        .as_array()
        .ok_or_else(|| invalid("response is not an array"))?;

    let segments: &[Value] = match root.first() {
        Some(Value::Array(segments)) => segments.as_slice(),
        Some(Value::Null) => &[],
        _ => return Err(invalid("missing segment list")),
    };

    let mut text = String::new();
    for segment in segments {
        let parts = segment
            .as_array()
            .ok_or_else(|| invalid("segment is not an array"))?;
        if let Some(fragment) = parts.first().and_then(Value::as_str) {
            text.push_str(fragment);
        }
    }

    let detected_language = root.get(2).and_then(Value::as_str).map(str::to_string);

    Ok(ParsedResponse {
        text,
        detected_language,
    })
}
