//! Image generation from extracted prompts.

use crate::gemini::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, generate_content_url, read_api_error,
};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use tutorgen_error::{ImageError, ImageErrorKind};

/// Stable Diffusion XL on the Hugging Face inference API.
pub const DEFAULT_HUGGINGFACE_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";

const HUGGINGFACE_TIMEOUT: Duration = Duration::from_secs(60);

const STYLE_HINTS: [&str; 4] = ["style", "background", "diagram", "illustration"];

const EDUCATIONAL_STYLE: [&str; 6] = [
    "educational diagram style",
    "clean and professional",
    "technical illustration",
    "white background",
    "high contrast",
    "clear and readable",
];

/// Which image service renders the prompts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageBackend {
    /// Gemini image generation
    #[default]
    Gemini,
    /// Hugging Face Stable Diffusion
    #[serde(alias = "hf")]
    #[strum(to_string = "huggingface", serialize = "hf")]
    HuggingFace,
}

/// Renders one prompt into one base64-encoded image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Render `prompt`.
    async fn generate_image(&self, prompt: &str) -> Result<String, ImageError>;
}

/// Append educational styling unless the prompt already speaks about style.
///
/// # Examples
///
/// ```
/// use tutorgen_models::enhance_educational_prompt;
///
/// let plain = enhance_educational_prompt("A neural network");
/// assert!(plain.ends_with("clear and readable"));
///
/// let styled = enhance_educational_prompt("A neural network diagram");
/// assert_eq!(styled, "A neural network diagram");
/// ```
pub fn enhance_educational_prompt(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    if STYLE_HINTS.iter().any(|hint| lower.contains(hint)) {
        prompt.to_string()
    } else {
        format!("{}, {}", prompt, EDUCATIONAL_STYLE.join(", "))
    }
}

/// Render every prompt in order, skipping the ones that fail.
///
/// The returned sequence can be shorter than the input; it is never an error.
#[instrument(skip(generator, prompts), fields(prompt_count = prompts.len()))]
pub async fn generate_images<G>(generator: &G, prompts: &[String]) -> Vec<String>
where
    G: ImageGenerator + ?Sized,
{
    let mut images = Vec::with_capacity(prompts.len());
    for (index, prompt) in prompts.iter().enumerate() {
        info!(image = index + 1, total = prompts.len(), "Generating image");
        match generator
            .generate_image(&enhance_educational_prompt(prompt))
            .await
        {
            Ok(image) => {
                info!(image = index + 1, "Successfully generated image");
                images.push(image);
            }
            Err(e) => {
                error!(image = index + 1, error = %e, "Error generating image");
            }
        }
    }
    images
}

/// Gemini image generation through `generateContent` with image output.
#[derive(Clone)]
pub struct GeminiImageGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiImageGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImageGenerator")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiImageGenerator {
    /// Default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ImageError> {
        Self::with_endpoint(api_key, DEFAULT_IMAGE_MODEL, DEFAULT_BASE_URL)
    }

    /// Custom model and endpoint.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ImageError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ImageError::new(ImageErrorKind::MissingApiKey(
                ImageBackend::Gemini.to_string(),
            )));
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageGenerator {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate_image(&self, prompt: &str) -> Result<String, ImageError> {
        let mut body = GenerateContentRequest::user_text(prompt);
        body.generation_config = GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
        };

        let response = self
            .client
            .post(generate_content_url(&self.base_url, &self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let err = read_api_error(response).await;
            return Err(ImageError::new(ImageErrorKind::Http {
                status_code,
                message: err.kind.to_string(),
            }));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Malformed(e.to_string())))?;

        let inline = parsed
            .inline_data()
            .ok_or_else(|| ImageError::new(ImageErrorKind::NoImage))?;
        debug!(mime = %inline.mime_type, "Received Gemini image");
        Ok(inline.data.clone())
    }
}

/// Stable Diffusion through the Hugging Face inference API.
#[derive(Clone)]
pub struct HuggingFaceImageGenerator {
    client: Client,
    api_key: String,
    url: String,
}

impl std::fmt::Debug for HuggingFaceImageGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceImageGenerator")
            .field("api_key", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}

impl HuggingFaceImageGenerator {
    /// Default Stable Diffusion XL endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ImageError> {
        Self::with_url(api_key, DEFAULT_HUGGINGFACE_URL)
    }

    /// Custom inference endpoint.
    pub fn with_url(api_key: impl Into<String>, url: impl Into<String>) -> Result<Self, ImageError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ImageError::new(ImageErrorKind::MissingApiKey(
                ImageBackend::HuggingFace.to_string(),
            )));
        }
        let client = Client::builder()
            .timeout(HUGGINGFACE_TIMEOUT)
            .build()
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.to_string())))?;
        Ok(Self {
            client,
            api_key,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ImageGenerator for HuggingFaceImageGenerator {
    #[instrument(skip(self, prompt), fields(url = %self.url))]
    async fn generate_image(&self, prompt: &str) -> Result<String, ImageError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ImageError::new(ImageErrorKind::Http {
                status_code: status.as_u16(),
                message,
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::new(ImageErrorKind::Malformed(e.to_string())))?;
        if bytes.is_empty() {
            return Err(ImageError::new(ImageErrorKind::NoImage));
        }
        debug!(bytes = bytes.len(), "Received Hugging Face image");
        Ok(STANDARD.encode(&bytes))
    }
}
