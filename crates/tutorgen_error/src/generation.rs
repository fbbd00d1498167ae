//! Terminal failures of a generation call.

/// Why a generation call produced no text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Upstream throttling persisted past the retry budget.
    #[display("Rate limited after {attempts} attempts")]
    RateLimited {
        /// Attempts made before giving up
        attempts: usize,
    },
    /// Any non-rate-limit failure from the upstream call.
    #[display("Unexpected generation failure: {_0}")]
    Unexpected(String),
    /// The caller cancelled the call before it finished.
    #[display("Generation cancelled")]
    Cancelled,
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use tutorgen_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::RateLimited { attempts: 3 });
/// assert!(err.to_string().contains("3 attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}
