//! Gemini generation client and downstream dispatchers.
//!
//! The [`GenerationClient`] is the only fallible step of content generation:
//! it calls a [`GenerationBackend`], waits out rate limits according to a
//! [`RetryPolicy`], and surfaces every other failure immediately.

mod backend;
mod client;
mod dispatch;
mod gemini;
mod retry;

pub use backend::GenerationBackend;
pub use client::GenerationClient;
pub use dispatch::{
    AudioSynthesizer, CodeArchive, CommandSynthesizer, DEFAULT_CODE_DIR, DEFAULT_HUGGINGFACE_URL,
    GeminiImageGenerator, HuggingFaceImageGenerator, ImageBackend, ImageGenerator,
    audio_file_name, code_file_name, enhance_educational_prompt, generate_images,
    synthesize_narration,
};
pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_MODEL, GeminiBackend, GeminiConfig,
    GeminiConfigBuilder, HarmBlockThreshold, HarmCategory, SAFETY_SETTINGS, SafetySetting,
};
pub use retry::{
    CancelSource, Cancellation, DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS, RetryPolicy, Sleeper,
    TokioSleeper, cancellation,
};
