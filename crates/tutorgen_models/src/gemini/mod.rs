//! Google Gemini REST integration.
//!
//! Only the `generateContent` endpoint is used, for both text and image
//! generation.

mod backend;
mod dto;
mod safety;

pub use backend::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiBackend, GeminiConfig, GeminiConfigBuilder};
pub use safety::{HarmBlockThreshold, HarmCategory, SAFETY_SETTINGS, SafetySetting};

pub(crate) use backend::{generate_content_url, read_api_error};
pub(crate) use dto::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};

/// Image generation model used by the Gemini image dispatcher.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
