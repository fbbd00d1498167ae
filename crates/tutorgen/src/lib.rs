//! Educational ML content generator.
//!
//! A [`Tutor`] turns a [`GenerationRequest`] into a [`Lesson`]: it builds the
//! instruction text, calls the generation service with rate-limit retry,
//! splits the reply by mode, and forwards narration scripts and image
//! prompts to the configured downstream services.
//!
//! # Example
//!
//! ```no_run
//! use tutorgen::{Cancellation, Depth, GenerationClient, GenerationRequest, GeminiConfig, Mode, Tutor};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GenerationClient::gemini(GeminiConfig::with_api_key("my-key"))?;
//! let tutor = Tutor::new(client);
//! let request = GenerationRequest::new("gradient descent", Depth::Brief, Mode::CodeWithExplanation);
//! let lesson = tutor.explain(&request, &Cancellation::never()).await?;
//! println!("{}", lesson.result().explanation());
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod config;
mod tutor;

pub use config::{
    AudioSection, CodeSection, GeminiSection, ImagesSection, RetrySection, TutorConfig,
};
pub use tutor::{Lesson, Tutor};

pub use tutorgen_content::{
    AUDIO_SCRIPT_MARKER, IMAGE_PROMPT_MARKER, MarkerParser, PromptBuilder, REFUSAL_MESSAGE,
    ResponseParser, build_prompt, detect_dependencies, parse_response,
};
pub use tutorgen_core::{Depth, GenerationRequest, GenerationResult, Mode};
pub use tutorgen_error::{
    AudioError, AudioErrorKind, CodeError, CodeErrorKind, ConfigError, ConfigErrorKind,
    GeminiError, GeminiErrorKind, GenerationError, GenerationErrorKind, ImageError,
    ImageErrorKind, OutputError, OutputErrorKind, TutorError, TutorErrorKind, TutorResult,
};
pub use tutorgen_models::{
    AudioSynthesizer, CancelSource, Cancellation, CodeArchive, CommandSynthesizer, GeminiBackend,
    GeminiConfig, GeminiImageGenerator, GenerationBackend, GenerationClient,
    HuggingFaceImageGenerator, ImageBackend, ImageGenerator, RetryPolicy, Sleeper, TokioSleeper,
    cancellation,
};
