//! Downstream consumers of parsed generation results.
//!
//! Narration scripts go to an [`AudioSynthesizer`]; image prompts go to an
//! [`ImageGenerator`] chosen by [`ImageBackend`]; extracted code goes to a
//! [`CodeArchive`].

mod audio;
mod code;
mod image;

use chrono::NaiveDateTime;

const MAX_TOPIC_CHARS: usize = 30;

/// `<topic>_<%Y%m%d_%H%M%S>.<extension>` with the topic sanitized to at most
/// 30 alphanumerics or underscores.
pub(crate) fn timestamped_file_name(
    topic: &str,
    timestamp: NaiveDateTime,
    extension: &str,
) -> String {
    let safe_topic: String = topic
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(MAX_TOPIC_CHARS)
        .collect();
    format!(
        "{}_{}.{}",
        safe_topic,
        timestamp.format("%Y%m%d_%H%M%S"),
        extension
    )
}

pub use audio::{AudioSynthesizer, CommandSynthesizer, audio_file_name, synthesize_narration};
pub use code::{CodeArchive, DEFAULT_CODE_DIR, code_file_name};
pub use image::{
    DEFAULT_HUGGINGFACE_URL, GeminiImageGenerator, HuggingFaceImageGenerator, ImageBackend,
    ImageGenerator, enhance_educational_prompt, generate_images,
};
