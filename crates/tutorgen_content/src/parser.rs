//! Splits generated text into explanation and mode-specific payload.

use crate::{AUDIO_SCRIPT_MARKER, IMAGE_PROMPT_MARKER};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};
use tutorgen_core::{GenerationResult, Mode};

/// First fenced block whose opening fence carries a language tag.
///
/// The tag must be followed by whitespace, so a fence glued to its code
/// (`` ```pythonprint(1)``` ``) is not a block and stays in the explanation.
static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_+#.-]+\s(.*?)```").expect("fenced code pattern is valid")
});

/// Decomposes raw generated text for a given mode.
///
/// Implementations must be total: malformed input yields a result whose
/// explanation is the whole text, never an error.
pub trait ResponseParser {
    /// Parse `raw` as a response to a request in `mode`.
    fn parse(&self, raw: &str, mode: Mode) -> GenerationResult;
}

/// Best-effort substring search for the fixed markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerParser;

impl ResponseParser for MarkerParser {
    fn parse(&self, raw: &str, mode: Mode) -> GenerationResult {
        parse_response(raw, mode)
    }
}

/// Parse generated text with the marker strategy.
///
/// # Examples
///
/// ```
/// use tutorgen_content::parse_response;
/// use tutorgen_core::Mode;
///
/// let result = parse_response("Intro text.\nAudio Script:\nHello there.", Mode::Audio);
/// assert_eq!(result.explanation(), "Intro text.");
/// assert_eq!(result.narration_script().as_deref(), Some("Hello there."));
/// ```
#[instrument(level = "debug", skip(raw), fields(raw_len = raw.len()))]
pub fn parse_response(raw: &str, mode: Mode) -> GenerationResult {
    match mode {
        Mode::TextOnly => GenerationResult::text(raw),
        Mode::CodeWithExplanation => parse_code(raw),
        Mode::Audio => parse_audio(raw),
        Mode::ImageExplanation => parse_images(raw),
    }
}

fn parse_code(raw: &str) -> GenerationResult {
    let Some(captures) = FENCED_CODE.captures(raw) else {
        debug!("No fenced code block found");
        return GenerationResult::text(raw);
    };
    // Group 0 always exists on a match; group 1 may be empty but is present.
    let (Some(block), Some(interior)) = (captures.get(0), captures.get(1)) else {
        return GenerationResult::text(raw);
    };

    let mut explanation = String::with_capacity(raw.len() - block.len());
    explanation.push_str(&raw[..block.start()]);
    explanation.push_str(&raw[block.end()..]);

    debug!(code_len = interior.as_str().trim().len(), "Extracted code block");
    GenerationResult::with_code(explanation.trim(), interior.as_str().trim())
}

fn parse_audio(raw: &str) -> GenerationResult {
    match raw.split_once(AUDIO_SCRIPT_MARKER) {
        Some((before, after)) => {
            debug!(script_len = after.trim().len(), "Extracted narration script");
            GenerationResult::with_narration(before.trim(), after.trim())
        }
        None => {
            debug!("No audio script marker found");
            GenerationResult::text(raw)
        }
    }
}

fn parse_images(raw: &str) -> GenerationResult {
    let Some(first) = raw.find(IMAGE_PROMPT_MARKER) else {
        debug!("No image prompt marker found");
        return GenerationResult::text(raw);
    };

    let (before, rest) = raw.split_at(first);
    let result = GenerationResult::with_image_prompts(before.trim(), rest.split(IMAGE_PROMPT_MARKER));
    debug!(prompts = result.image_prompts().len(), "Extracted image prompts");
    result
}
