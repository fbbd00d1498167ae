//! Generated code archiving error types.

/// Code archiving error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CodeErrorKind {
    /// Extracted code was empty or whitespace
    #[display("Cannot save empty code")]
    EmptyCode,
    /// Output directory or file could not be written
    #[display("Code output error: {_0}")]
    Io(String),
}

/// Code archiving error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Code Error: {} at line {} in {}", kind, line, file)]
pub struct CodeError {
    /// The kind of error that occurred
    pub kind: CodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CodeError {
    /// Create a new code error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
