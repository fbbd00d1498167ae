//! Audio synthesis error types.

/// Audio synthesis error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AudioErrorKind {
    /// Narration script was empty or whitespace
    #[display("Cannot generate audio from empty text")]
    EmptyScript,
    /// Output location could not be prepared
    #[display("Audio output error: {_0}")]
    Io(String),
    /// Synthesizer program failed to start or exited unsuccessfully
    #[display("Synthesizer failed: {_0}")]
    Synthesizer(String),
}

/// Audio synthesis error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Audio Error: {} at line {} in {}", kind, line, file)]
pub struct AudioError {
    /// The kind of error that occurred
    pub kind: AudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AudioError {
    /// Create a new audio error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
