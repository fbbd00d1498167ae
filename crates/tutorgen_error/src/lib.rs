//! Error types for the tutorgen educational content generator.
//!
//! Every error struct records the file and line where it was created.

mod audio;
mod code;
mod config;
mod error;
mod gemini;
mod generation;
mod image;
mod output;

pub use audio::{AudioError, AudioErrorKind};
pub use code::{CodeError, CodeErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{TutorError, TutorErrorKind, TutorResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use image::{ImageError, ImageErrorKind};
pub use output::{OutputError, OutputErrorKind};
