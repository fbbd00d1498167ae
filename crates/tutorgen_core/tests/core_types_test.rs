//! Request, result, depth and mode behaviour.

use std::str::FromStr;
use tutorgen_core::{Depth, GenerationRequest, GenerationResult, Mode};

#[test]
fn test_depth_parses_case_insensitively() {
    assert_eq!(Depth::from_str("brief").unwrap(), Depth::Brief);
    assert_eq!(Depth::from_str("COMPREHENSIVE").unwrap(), Depth::Comprehensive);
    assert!(Depth::from_str("shallow").is_err());
    assert_eq!(Depth::Detailed.to_string(), "Detailed");
}

#[test]
fn test_mode_accepts_short_and_long_names() {
    assert_eq!(Mode::from_str("code").unwrap(), Mode::CodeWithExplanation);
    assert_eq!(
        Mode::from_str("Code with explanation").unwrap(),
        Mode::CodeWithExplanation
    );
    assert_eq!(Mode::from_str("IMAGE").unwrap(), Mode::ImageExplanation);
    assert!(Mode::from_str("video").is_err());
}

#[test]
fn test_mode_display_is_prompt_label() {
    assert_eq!(Mode::ImageExplanation.to_string(), "Image Explanation");
    assert_eq!(Mode::TextOnly.to_string(), "Text explanation");
}

#[test]
fn test_request_builder_defaults() {
    let request = GenerationRequest::builder()
        .topic("attention")
        .build()
        .unwrap();
    assert_eq!(request.topic(), "attention");
    assert_eq!(*request.depth(), Depth::Detailed);
    assert_eq!(*request.mode(), Mode::TextOnly);
}

#[test]
fn test_request_builder_requires_topic() {
    assert!(GenerationRequest::builder().build().is_err());
}

#[test]
fn test_image_prompts_are_trimmed_and_filtered() {
    let result = GenerationResult::with_image_prompts("x", ["  a ", "", "   ", "b", "a"]);
    assert_eq!(
        result.image_prompts(),
        &vec!["a".to_string(), "b".to_string(), "a".to_string()]
    );
}

#[test]
fn test_empty_payloads_become_none() {
    assert!(GenerationResult::with_code("x", "").code().is_none());
    assert!(
        GenerationResult::with_narration("x", "")
            .narration_script()
            .is_none()
    );
}

#[test]
fn test_result_serializes_to_json() {
    let result = GenerationResult::with_code("why", "print(1)");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["code"], "print(1)");
    assert!(json["narration_script"].is_null());
}
