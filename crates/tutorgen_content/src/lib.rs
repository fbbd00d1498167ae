//! Prompt construction and response parsing.
//!
//! Both halves are total functions: building a prompt is pure string
//! composition, and parsing degrades to "whole text as explanation" when the
//! expected markers are missing. Extracted code can additionally be scanned
//! for the packages it imports.

mod dependencies;
mod markers;
mod parser;
mod prompt;

pub use dependencies::detect_dependencies;
pub use markers::{AUDIO_SCRIPT_MARKER, IMAGE_PROMPT_MARKER, REFUSAL_MESSAGE};
pub use parser::{MarkerParser, ResponseParser, parse_response};
pub use prompt::{PromptBuilder, build_prompt};
