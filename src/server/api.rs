//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::Translator;
use crate::core::errors::TranslationError;
use crate::core::languages::{self, check_language_code, is_valid_target};
use crate::core::models::{OptionsUpdate, Translation, TranslatorOptions};

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Translator,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
    endpoint: String,
}

/// Languages list response
#[derive(Serialize)]
struct LanguagesResponse {
    object: String,
    data: Vec<LanguageInfo>,
}

#[derive(Serialize)]
struct LanguageInfo {
    code: &'static str,
    name: &'static str,
}

/// Translation request; language fields override and update the session options
#[derive(Deserialize)]
pub struct TranslateRequest {
    /// Text to translate
    pub text: String,
    /// Optional language overrides
    #[serde(flatten)]
    pub options: OptionsUpdate,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error message and machine-readable code
#[derive(Serialize)]
pub struct ErrorDetail {
    /// Human-readable message
    pub message: String,
    /// Stable error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Error returned by handlers, rendered as a JSON body with a matching status
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "not_found",
            message: message.into(),
        }
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            match err {
                TranslationError::ApiError { .. }
                | TranslationError::NetworkError { .. }
                | TranslationError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        };

        Self {
            status,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail {
                message: self.message,
                code: Some(self.code.to_string()),
            },
        };
        (self.status, Json(body)).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoint: state.translator.endpoint().to_string(),
    })
}

/// Get languages handler
async fn get_languages() -> Json<LanguagesResponse> {
    let data = languages::languages()
        .map(|(code, name)| LanguageInfo { code, name })
        .collect();

    Json(LanguagesResponse {
        object: "list".to_string(),
        data,
    })
}

async fn get_options(State(state): State<Arc<AppState>>) -> Json<TranslatorOptions> {
    Json(state.translator.options().await)
}

/// Update options; rejects the whole update if any field is invalid
async fn put_options(
    State(state): State<Arc<AppState>>,
    Json(update): Json<OptionsUpdate>,
) -> ApiResult<TranslatorOptions> {
    if let Some(language) = &update.input_language {
        if check_language_code(language).is_none() {
            return Err(TranslationError::InvalidLanguage {
                value: language.clone(),
            }
            .into());
        }
    }

    if let Some(language) = &update.output_language {
        if !check_language_code(language).is_some_and(is_valid_target) {
            return Err(TranslationError::InvalidLanguage {
                value: language.clone(),
            }
            .into());
        }
    }

    Ok(Json(state.translator.set_options(&update).await))
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> ApiResult<Translation> {
    let update = (!payload.options.is_empty()).then_some(&payload.options);

    match state.translator.translate(&payload.text, update).await {
        Ok(translation) => Ok(Json(translation)),
        Err(e) => {
            warn!("Translation failed: {}", e);
            Err(e.into())
        }
    }
}

async fn list_translations(State(state): State<Arc<AppState>>) -> Json<Vec<Translation>> {
    Json(state.translator.translations().await)
}

async fn clear_translations(State(state): State<Arc<AppState>>) -> Json<CountResponse> {
    let count = state.translator.clear().await;
    Json(CountResponse { count })
}

async fn latest_translation(State(state): State<Arc<AppState>>) -> ApiResult<Translation> {
    state
        .translator
        .latest()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No translations yet"))
}

async fn count_translations(State(state): State<Arc<AppState>>) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.translator.count().await,
    })
}

/// Build the API router around a translator
pub fn router(translator: Translator) -> Router {
    let state = Arc::new(AppState { translator });

    Router::new()
        .route("/", get(health_check))
        .route("/languages", get(get_languages))
        .route("/options", get(get_options).put(put_options))
        .route("/translate", axum::routing::post(translate))
        .route(
            "/translations",
            get(list_translations).delete(clear_translations),
        )
        .route("/translations/latest", get(latest_translation))
        .route("/translations/count", get(count_translations))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, translator: Translator) -> anyhow::Result<()> {
    let app = router(translator);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
