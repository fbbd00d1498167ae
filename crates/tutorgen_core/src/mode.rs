//! Output modes.

use serde::{Deserialize, Serialize};

/// The requested output shape.
///
/// The mode drives both the extra instructions sent upstream and the way
/// the generated text is split afterwards. `Display` yields the label that
/// is embedded in the prompt; parsing also accepts the short CLI names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Plain explanation only
    #[default]
    #[strum(to_string = "Text explanation", serialize = "text")]
    TextOnly,
    /// Explanation followed by a fenced code block
    #[strum(to_string = "Code with explanation", serialize = "code")]
    CodeWithExplanation,
    /// Explanation plus a narration script
    #[strum(to_string = "Audio", serialize = "audio")]
    Audio,
    /// Explanation plus illustration prompts
    #[strum(to_string = "Image Explanation", serialize = "image")]
    ImageExplanation,
}
