//! TOML configuration.
//!
//! Secrets are never read from the file; API keys come from the environment
//! or command-line flags.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};
use tutorgen_error::{ConfigError, ConfigErrorKind, TutorResult};
use tutorgen_models::{
    DEFAULT_BACKOFF, DEFAULT_BASE_URL, DEFAULT_CODE_DIR, DEFAULT_HUGGINGFACE_URL,
    DEFAULT_IMAGE_MODEL, DEFAULT_MAX_ATTEMPTS, DEFAULT_MODEL, ImageBackend, RetryPolicy,
};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct TutorConfig {
    /// Text generation settings
    gemini: GeminiSection,
    /// Rate-limit retry settings
    retry: RetrySection,
    /// Image dispatch settings
    images: ImagesSection,
    /// Audio dispatch settings
    audio: AudioSection,
    /// Generated code archiving settings
    code: CodeSection,
}

impl TutorConfig {
    /// Load configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TutorResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Read {
                    path: path.as_ref().display().to_string(),
                    message: e.to_string(),
                })
            })?;
        let config = Self::from_toml(&content)?;
        debug!("Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(content: &str) -> TutorResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.retry.policy()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `tutorgen.toml` when it exists,
    /// otherwise defaults.
    pub fn load(path: Option<&Path>) -> TutorResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new("tutorgen.toml");
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}

/// `[gemini]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct GeminiSection {
    /// Text model identifier
    model: String,
    /// REST base URL
    base_url: String,
}

impl Default for GeminiSection {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// `[retry]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct RetrySection {
    /// Total attempts, the first call included
    max_attempts: usize,
    /// Fixed wait after a rate-limit response, in seconds
    backoff_secs: u64,
}

impl RetrySection {
    /// Validated retry policy.
    pub fn policy(&self) -> Result<RetryPolicy, ConfigError> {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.backoff_secs))
    }
}

impl Default for RetrySection {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_secs: DEFAULT_BACKOFF.as_secs(),
        }
    }
}

/// `[images]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesSection {
    /// Which service renders prompts
    backend: ImageBackend,
    /// Gemini image model
    gemini_model: String,
    /// Hugging Face inference endpoint
    huggingface_url: String,
}

impl Default for ImagesSection {
    fn default() -> Self {
        Self {
            backend: ImageBackend::default(),
            gemini_model: DEFAULT_IMAGE_MODEL.to_string(),
            huggingface_url: DEFAULT_HUGGINGFACE_URL.to_string(),
        }
    }
}

/// `[audio]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct AudioSection {
    /// Text-to-speech program
    program: String,
    /// Directory for generated audio
    output_dir: PathBuf,
}

impl Default for AudioSection {
    fn default() -> Self {
        Self {
            program: "espeak-ng".to_string(),
            output_dir: PathBuf::from("generated_audio"),
        }
    }
}

/// `[code]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct CodeSection {
    /// Directory for generated programs
    output_dir: PathBuf,
}

impl Default for CodeSection {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_CODE_DIR),
        }
    }
}
