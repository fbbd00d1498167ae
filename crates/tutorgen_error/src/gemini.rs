//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// API key not provided
    MissingApiKey,
    /// API request could not be sent or read
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Quota or rate limit exhausted (HTTP 429 / RESOURCE_EXHAUSTED)
    ResourceExhausted(String),
    /// Response carried no text (blocked or empty candidate)
    EmptyResponse(String),
    /// Response body did not match the expected shape
    ResponseParsing(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY not provided")
            }
            GeminiErrorKind::ApiRequest(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::ResourceExhausted(msg) => {
                write!(f, "Resource exhausted: {}", msg)
            }
            GeminiErrorKind::EmptyResponse(msg) => write!(f, "Empty response: {}", msg),
            GeminiErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse response: {}", msg)
            }
        }
    }
}

impl GeminiErrorKind {
    /// Check if this error signals upstream throttling.
    ///
    /// Only throttling is worth waiting out; every other failure is terminal.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            GeminiErrorKind::ResourceExhausted(_) => true,
            GeminiErrorKind::HttpError { status_code, .. } => *status_code == 429,
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use tutorgen_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for `self.kind.is_rate_limited()`.
    pub fn is_rate_limited(&self) -> bool {
        self.kind.is_rate_limited()
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
