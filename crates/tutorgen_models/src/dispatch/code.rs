//! Archiving of extracted code blocks.

use super::timestamped_file_name;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};
use tutorgen_error::{CodeError, CodeErrorKind};

/// Directory generated programs are written to by default.
pub const DEFAULT_CODE_DIR: &str = "generated_code";

/// File name for a generated program: sanitized topic plus timestamp.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tutorgen_models::code_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(code_file_name("k-means", at), "k_means_20240501_093000.py");
/// ```
pub fn code_file_name(topic: &str, timestamp: NaiveDateTime) -> String {
    timestamped_file_name(topic, timestamp, "py")
}

/// Writes extracted programs into a directory, one file per lesson.
#[derive(Debug, Clone)]
pub struct CodeArchive {
    output_dir: PathBuf,
}

impl CodeArchive {
    /// Archive writing into `output_dir`, created on first save.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory programs are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save `code` under a name derived from `topic` and the current time.
    pub async fn save(&self, code: &str, topic: &str) -> Result<PathBuf, CodeError> {
        self.save_at(code, topic, chrono::Local::now().naive_local())
            .await
    }

    /// Save `code` under a name derived from `topic` and `timestamp`.
    ///
    /// # Errors
    ///
    /// Empty or whitespace-only code is refused before touching the disk.
    #[instrument(skip(self, code), fields(code_len = code.len(), dir = %self.output_dir.display()))]
    pub async fn save_at(
        &self,
        code: &str,
        topic: &str,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, CodeError> {
        if code.trim().is_empty() {
            warn!("Cannot save empty code");
            return Err(CodeError::new(CodeErrorKind::EmptyCode));
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| CodeError::new(CodeErrorKind::Io(e.to_string())))?;

        let path = self.output_dir.join(code_file_name(topic, timestamp));
        tokio::fs::write(&path, code).await.map_err(|e| {
            error!(error = %e, "Failed to write code file");
            CodeError::new(CodeErrorKind::Io(e.to_string()))
        })?;

        info!(path = %path.display(), "Code saved");
        Ok(path)
    }
}
