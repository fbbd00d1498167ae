//! Instruction text sent to the generation service.

use crate::{AUDIO_SCRIPT_MARKER, IMAGE_PROMPT_MARKER, REFUSAL_MESSAGE};
use tracing::{debug, instrument};
use tutorgen_core::{Depth, GenerationRequest, Mode};

/// Assembles the single instruction string for a request.
///
/// The domain restriction is advisory text for the remote model; no topic
/// validation happens locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the instruction text for `request`.
    pub fn build(&self, request: &GenerationRequest) -> String {
        build_prompt(request.topic(), *request.depth(), *request.mode())
    }
}

/// Build the instruction text from its parts.
///
/// # Examples
///
/// ```
/// use tutorgen_content::{build_prompt, AUDIO_SCRIPT_MARKER};
/// use tutorgen_core::{Depth, Mode};
///
/// let prompt = build_prompt("backpropagation", Depth::Brief, Mode::Audio);
/// assert!(prompt.contains(AUDIO_SCRIPT_MARKER));
/// ```
#[instrument(level = "debug", skip(topic), fields(topic_len = topic.len()))]
pub fn build_prompt(topic: &str, depth: Depth, mode: Mode) -> String {
    let mut prompt = base_instructions(topic, depth, mode);
    prompt.push_str(&mode_instructions(topic, mode));
    prompt.push_str(FORMATTING_RULES);
    debug!(prompt_len = prompt.len(), "Built prompt");
    prompt
}

fn base_instructions(topic: &str, depth: Depth, mode: Mode) -> String {
    format!(
        r#"
You are an expert Machine Learning tutor providing educational content ONLY for topics related to Artificial Intelligence (AI), Machine Learning (ML), and Deep Learning.

IMPORTANT RESTRICTIONS:
- You MUST ONLY respond to topics related to AI, ML, or Deep Learning.
- If the topic "{topic}" is NOT related to AI/ML/DL, respond with:
  "{REFUSAL_MESSAGE}"
- Do NOT provide information outside of AI/ML/DL domains.

Topic: "{topic}"
Required format: {mode}
Explanation depth: {depth}

Teaching Guidelines:
- Start with a clear learning objective
- Provide structured explanations with examples
- Use appropriate technical depth for the topic
- Include practical applications when relevant
- Ensure accuracy and clarity
"#
    )
}

fn mode_instructions(topic: &str, mode: Mode) -> String {
    match mode {
        Mode::TextOnly => String::new(),
        Mode::CodeWithExplanation => format!(
            r#"
You MUST also generate a Python program that demonstrates how {topic} works.
Before the Python code block, provide a detailed but beginner-friendly explanation in plain text.
This explanation should cover the model, key functions, and evaluation.
The Python code itself should be enclosed in a single ```python``` code block.
Include helpful comments in the code explaining key steps.
Show expected outputs or results where applicable.
"#
        ),
        Mode::Audio => format!(
            r#"
Provide an AUDIO SCRIPT clearly labeled as:
{AUDIO_SCRIPT_MARKER}
The script should sound natural and suitable for narration.
"#
        ),
        Mode::ImageExplanation => format!(
            r#"
Provide IMAGE PROMPTS, each one starting with the label:
{IMAGE_PROMPT_MARKER}
Each prompt should describe a clear educational diagram or illustration.
"#
        ),
    }
}

const FORMATTING_RULES: &str = r#"
Formatting Rules:
- Format output as clean text WITHOUT markdown symbols like #, *, **, etc.
- Use plain text formatting with clear paragraphs and line breaks
- For headings, use ALL CAPS or underlines instead of # symbols
- For emphasis, use Uppercase or quotation marks instead of * or **
"#;
