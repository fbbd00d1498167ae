//! Text generation over the Gemini REST API.

use crate::GenerationBackend;
use crate::gemini::SAFETY_SETTINGS;
use crate::gemini::dto::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use derive_builder::Builder;
use derive_getters::Getters;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error, instrument, warn};
use tutorgen_error::{GeminiError, GeminiErrorKind};

/// Model used for text generation.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Credentials and endpoint for the Gemini API.
///
/// Passed explicitly so tests can point at a mock server with a fake key.
#[derive(Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL, without trailing slash
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
}

impl GeminiConfig {
    /// Creates a new builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Default model and endpoint with the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Gemini text-generation backend.
///
/// Makes exactly one HTTP call per [`GenerationBackend::generate_content`];
/// retrying is the client's job.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    /// Create a backend, rejecting an empty API key.
    #[instrument(skip(config), fields(model = %config.model))]
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }
        debug!(url = %config.base_url, "Created Gemini backend");
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    #[instrument(skip(self, instruction), fields(model = %self.config.model, prompt_len = instruction.len()))]
    async fn generate_content(&self, instruction: &str) -> Result<String, GeminiError> {
        let mut body = GenerateContentRequest::user_text(instruction);
        body.safety_settings = SAFETY_SETTINGS.to_vec();

        let url = generate_content_url(&self.config.base_url, &self.config.model);
        debug!(%url, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        if !response.status().is_success() {
            return Err(read_api_error(response).await);
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })?;

        match parsed.text() {
            Some(text) => {
                debug!(text_len = text.len(), "Received generated text");
                Ok(text)
            }
            None => {
                let reason = parsed.empty_reason();
                warn!(%reason, "Response carried no text");
                Err(GeminiError::new(GeminiErrorKind::EmptyResponse(reason)))
            }
        }
    }
}

/// `{base_url}/models/{model}:generateContent`
pub(crate) fn generate_content_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

/// Map a non-success response to a Gemini error, classifying throttling.
pub(crate) async fn read_api_error(response: Response) -> GeminiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let envelope = serde_json::from_str::<ApiErrorEnvelope>(&text).ok();

    // Proxies may rewrite the HTTP status; the body still names the throttle.
    let exhausted = status == StatusCode::TOO_MANY_REQUESTS
        || envelope.as_ref().is_some_and(|e| {
            e.error.code == Some(StatusCode::TOO_MANY_REQUESTS.as_u16())
                || e.error.status.as_deref() == Some("RESOURCE_EXHAUSTED")
        });
    let message = envelope
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or(text);

    if exhausted {
        warn!(status = %status, "Gemini rate limit response");
        GeminiError::new(GeminiErrorKind::ResourceExhausted(message))
    } else {
        error!(status = %status, error = %message, "Gemini API error");
        GeminiError::new(GeminiErrorKind::HttpError {
            status_code: status.as_u16(),
            message,
        })
    }
}
