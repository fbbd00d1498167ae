//! Parsed generation output.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Generated text decomposed into its logical fields.
///
/// At most one of `code`, `narration_script` and `image_prompts` is
/// populated, chosen by the request's mode. Image prompts are trimmed,
/// non-empty, and kept in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    explanation: String,
    code: Option<String>,
    narration_script: Option<String>,
    image_prompts: Vec<String>,
}

impl GenerationResult {
    /// Result carrying only an explanation.
    pub fn text(explanation: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            ..Self::default()
        }
    }

    /// Explanation plus a code block. Empty code is stored as `None`.
    pub fn with_code(explanation: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            code: non_empty(code.into()),
            ..Self::default()
        }
    }

    /// Explanation plus a narration script. Empty scripts are stored as `None`.
    pub fn with_narration(explanation: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            narration_script: non_empty(script.into()),
            ..Self::default()
        }
    }

    /// Explanation plus image prompts. Blank prompts are dropped, the rest trimmed.
    pub fn with_image_prompts<I, S>(explanation: impl Into<String>, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            explanation: explanation.into(),
            image_prompts: prompts
                .into_iter()
                .map(|p| p.as_ref().trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            ..Self::default()
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
