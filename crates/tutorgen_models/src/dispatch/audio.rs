//! Narration audio synthesis.

use super::timestamped_file_name;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{error, info, instrument, warn};
use tutorgen_error::{AudioError, AudioErrorKind};

/// Turns a narration script into an audio file.
#[async_trait]
pub trait AudioSynthesizer: Send + Sync {
    /// Write audio for `script` and return its path. `topic` names the file.
    async fn synthesize(&self, script: &str, topic: &str) -> Result<PathBuf, AudioError>;
}

/// File name for a narration: sanitized topic plus timestamp.
///
/// Non-alphanumeric characters become `_` and the topic is cut to 30
/// characters.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tutorgen_models::audio_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(audio_file_name("k-means", at), "k_means_20240501_093000.wav");
/// ```
pub fn audio_file_name(topic: &str, timestamp: NaiveDateTime) -> String {
    timestamped_file_name(topic, timestamp, "wav")
}

/// Synthesize `script`, refusing empty scripts without calling the synthesizer.
#[instrument(skip(synthesizer, script), fields(script_len = script.len()))]
pub async fn synthesize_narration<A>(
    synthesizer: &A,
    script: &str,
    topic: &str,
) -> Result<PathBuf, AudioError>
where
    A: AudioSynthesizer + ?Sized,
{
    if script.trim().is_empty() {
        warn!("Cannot generate audio from empty text");
        return Err(AudioError::new(AudioErrorKind::EmptyScript));
    }
    synthesizer.synthesize(script, topic).await
}

/// Runs an external text-to-speech program: `<program> -w <path> -- <script>`.
///
/// The argument shape matches `espeak-ng` and `espeak`. The `--` keeps a
/// script that starts with `-` from being read as an option.
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: String,
    output_dir: PathBuf,
}

impl CommandSynthesizer {
    /// Synthesizer writing into `output_dir`.
    pub fn new(program: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Directory audio files are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl AudioSynthesizer for CommandSynthesizer {
    #[instrument(skip(self, script), fields(program = %self.program))]
    async fn synthesize(&self, script: &str, topic: &str) -> Result<PathBuf, AudioError> {
        if script.trim().is_empty() {
            return Err(AudioError::new(AudioErrorKind::EmptyScript));
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AudioError::new(AudioErrorKind::Io(e.to_string())))?;

        let file_name = audio_file_name(topic, chrono::Local::now().naive_local());
        let path = self.output_dir.join(file_name);

        let output = Command::new(&self.program)
            .arg("-w")
            .arg(&path)
            .arg("--")
            .arg(script)
            .output()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to start synthesizer");
                AudioError::new(AudioErrorKind::Synthesizer(e.to_string()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(status = %output.status, %stderr, "Synthesizer exited unsuccessfully");
            return Err(AudioError::new(AudioErrorKind::Synthesizer(format!(
                "{}: {}",
                output.status, stderr
            ))));
        }

        info!(path = %path.display(), "Audio generated successfully");
        Ok(path)
    }
}
