//! Prompt text per mode and depth.

use strum::IntoEnumIterator;
use tutorgen_content::{
    AUDIO_SCRIPT_MARKER, IMAGE_PROMPT_MARKER, PromptBuilder, REFUSAL_MESSAGE, build_prompt,
};
use tutorgen_core::{Depth, GenerationRequest, Mode};

#[test]
fn test_every_mode_carries_restriction_and_formatting() {
    for mode in Mode::iter() {
        let prompt = build_prompt("k-means clustering", Depth::Detailed, mode);
        assert!(prompt.contains(REFUSAL_MESSAGE), "{mode}");
        assert!(prompt.contains("Topic: \"k-means clustering\""), "{mode}");
        assert!(prompt.contains("WITHOUT markdown symbols"), "{mode}");
        assert!(prompt.trim_end().ends_with("instead of * or **"), "{mode}");
    }
}

#[test]
fn test_text_mode_adds_no_payload_instructions() {
    let prompt = build_prompt("transformers", Depth::Brief, Mode::TextOnly);
    assert!(!prompt.contains(AUDIO_SCRIPT_MARKER));
    assert!(!prompt.contains(IMAGE_PROMPT_MARKER));
    assert!(!prompt.contains("```python```"));
    assert!(prompt.contains("Explanation depth: Brief"));
}

#[test]
fn test_mode_specific_instructions() {
    let code = build_prompt("SVMs", Depth::Brief, Mode::CodeWithExplanation);
    assert!(code.contains("```python```"));
    assert!(code.contains("demonstrates how SVMs works"));

    let audio = build_prompt("SVMs", Depth::Brief, Mode::Audio);
    assert!(audio.contains(AUDIO_SCRIPT_MARKER));
    assert!(!audio.contains(IMAGE_PROMPT_MARKER));

    let image = build_prompt("SVMs", Depth::Brief, Mode::ImageExplanation);
    assert!(image.contains(IMAGE_PROMPT_MARKER));
    assert!(image.contains("Required format: Image Explanation"));
}

#[test]
fn test_builder_uses_request_fields() {
    let request = GenerationRequest::new("dropout", Depth::Comprehensive, Mode::Audio);
    let prompt = PromptBuilder.build(&request);
    assert_eq!(prompt, build_prompt("dropout", Depth::Comprehensive, Mode::Audio));
}
