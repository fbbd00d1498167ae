//! Literal markers shared by the prompt and the parser.

/// Precedes the narration script in audio mode.
pub const AUDIO_SCRIPT_MARKER: &str = "Audio Script:";

/// Precedes each illustration prompt in image mode.
pub const IMAGE_PROMPT_MARKER: &str = "IMG-PROMPT:";

/// Fixed reply the model is told to give for off-domain topics.
pub const REFUSAL_MESSAGE: &str = "I apologize, but I can only provide information about Artificial Intelligence, Machine Learning, and Deep Learning.";
