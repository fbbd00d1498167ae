//! Configuration error types.

/// What went wrong while loading or validating settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Settings file could not be read
    #[display("Failed to read {path}: {message}")]
    Read {
        /// File that was requested
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Settings file is not valid TOML for the expected sections
    #[display("Failed to parse settings: {_0}")]
    Parse(String),
    /// A setting holds a value the generator cannot run with
    #[display("Invalid {setting}: {reason}")]
    Invalid {
        /// Dotted setting name, such as `retry.max_attempts`
        setting: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use tutorgen_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::invalid("retry.max_attempts", "must be at least 1");
/// assert!(matches!(err.kind, ConfigErrorKind::Invalid { .. }));
/// assert!(err.to_string().contains("retry.max_attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Settings Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ConfigErrorKind::Invalid`].
    #[track_caller]
    pub fn invalid(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            setting: setting.into(),
            reason: reason.into(),
        })
    }
}
