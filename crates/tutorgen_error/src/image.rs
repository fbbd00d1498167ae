//! Image generation error types.

/// Image generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// API key for the selected backend not provided
    #[display("Missing API key for {_0}")]
    MissingApiKey(String),
    /// Request failed before a response arrived
    #[display("Image request failed: {_0}")]
    Request(String),
    /// Backend answered with a non-success status
    #[display("Image backend returned HTTP {status_code}: {message}")]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body
        message: String,
    },
    /// Response contained no image data
    #[display("No image in response")]
    NoImage,
    /// Response body could not be decoded
    #[display("Malformed image response: {_0}")]
    Malformed(String),
    /// Writing a decoded image failed
    #[display("Image output error: {_0}")]
    Io(String),
}

/// Image generation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new image error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
