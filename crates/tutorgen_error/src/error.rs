//! Crate-level error aggregation.

use crate::{
    AudioError, CodeError, ConfigError, GeminiError, GenerationError, ImageError, OutputError,
};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum TutorErrorKind {
    /// Generation call failed
    Generation(GenerationError),
    /// Gemini backend failure
    Gemini(GeminiError),
    /// Image dispatch failure
    Image(ImageError),
    /// Audio dispatch failure
    Audio(AudioError),
    /// Generated code archiving failure
    Code(CodeError),
    /// Configuration error
    Config(ConfigError),
    /// Lesson output failure
    Output(OutputError),
}

impl std::fmt::Display for TutorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorErrorKind::Generation(e) => write!(f, "{}", e),
            TutorErrorKind::Gemini(e) => write!(f, "{}", e),
            TutorErrorKind::Image(e) => write!(f, "{}", e),
            TutorErrorKind::Audio(e) => write!(f, "{}", e),
            TutorErrorKind::Code(e) => write!(f, "{}", e),
            TutorErrorKind::Config(e) => write!(f, "{}", e),
            TutorErrorKind::Output(e) => write!(f, "{}", e),
        }
    }
}

/// Tutor error with kind discrimination.
#[derive(Debug)]
pub struct TutorError(Box<TutorErrorKind>);

impl TutorError {
    /// Create a new error from a kind.
    pub fn new(kind: TutorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TutorErrorKind {
        &self.0
    }
}

impl std::fmt::Display for TutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tutor Error: {}", self.0)
    }
}

impl std::error::Error for TutorError {}

// Generic From implementation for any type that converts to TutorErrorKind
impl<T> From<T> for TutorError
where
    T: Into<TutorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for tutor operations.
pub type TutorResult<T> = std::result::Result<T, TutorError>;
