//! Explain command handler.

use super::ExplainArgs;
use crate::{Lesson, Tutor, TutorConfig};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tutorgen_core::{GenerationRequest, Mode};
use tutorgen_error::{
    ConfigError, ImageError, ImageErrorKind, OutputError, OutputErrorKind, TutorResult,
};
use tutorgen_models::{
    Cancellation, CodeArchive, CommandSynthesizer, GeminiBackend, GeminiConfig,
    GeminiImageGenerator, GenerationClient, HuggingFaceImageGenerator, ImageBackend,
    ImageGenerator, TokioSleeper,
};

/// Assemble a Gemini-backed tutor for `args.mode`.
///
/// Only the downstream service the mode needs is configured. A missing
/// Hugging Face key disables image rendering with a warning instead of
/// failing the whole command.
pub fn build_tutor(config: &TutorConfig, args: &ExplainArgs) -> TutorResult<Tutor<GeminiBackend>> {
    let gemini = GeminiConfig::builder()
        .api_key(args.gemini_api_key.clone())
        .model(config.gemini().model().clone())
        .base_url(config.gemini().base_url().clone())
        .build()
        .map_err(|e| ConfigError::invalid("gemini", e.to_string()))?;

    let client = GenerationClient::new(
        GeminiBackend::new(gemini)?,
        config.retry().policy()?,
        TokioSleeper,
    );
    let mut tutor = Tutor::new(client);

    match args.mode {
        Mode::CodeWithExplanation => {
            let dir = args
                .code_dir
                .clone()
                .unwrap_or_else(|| config.code().output_dir().clone());
            tutor = tutor.with_code_archive(CodeArchive::new(dir));
        }
        Mode::Audio => {
            let audio = config.audio();
            tutor = tutor.with_audio(Arc::new(CommandSynthesizer::new(
                audio.program().clone(),
                audio.output_dir().clone(),
            )));
        }
        Mode::ImageExplanation => {
            let images = config.images();
            let backend = args.image_backend.unwrap_or(*images.backend());
            let generator: Option<Arc<dyn ImageGenerator>> = match backend {
                ImageBackend::Gemini => Some(Arc::new(GeminiImageGenerator::with_endpoint(
                    args.gemini_api_key.clone(),
                    images.gemini_model().clone(),
                    config.gemini().base_url().clone(),
                )?)),
                ImageBackend::HuggingFace => match args.hf_api_key.as_deref() {
                    Some(key) if !key.trim().is_empty() => Some(Arc::new(
                        HuggingFaceImageGenerator::with_url(key, images.huggingface_url().clone())?,
                    )),
                    _ => {
                        warn!("HF_API_KEY not set, image prompts will not be rendered");
                        None
                    }
                },
            };
            if let Some(generator) = generator {
                tutor = tutor.with_images(generator);
            }
        }
        Mode::TextOnly => {}
    }

    Ok(tutor)
}

/// Handles the explain command.
#[instrument(skip_all, fields(topic = %args.topic, mode = %args.mode))]
pub async fn handle_explain_command(
    config: &TutorConfig,
    args: &ExplainArgs,
    cancel: &Cancellation,
) -> TutorResult<()> {
    let tutor = build_tutor(config, args)?;
    let request = GenerationRequest::new(args.topic.clone(), args.depth, args.mode);

    let lesson = tutor.explain(&request, cancel).await?;

    let written = match &args.image_dir {
        Some(dir) if !lesson.images().is_empty() => write_images(lesson.images(), dir)?,
        _ => Vec::new(),
    };

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&lesson)
            .map_err(|e| OutputError::new(OutputErrorKind::Encode(e.to_string())))?;
        json.push('\n');
        json
    } else {
        render_lesson(&lesson, &written)
    };
    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .map_err(|e| OutputError::new(OutputErrorKind::Write(e.to_string())))?;
    Ok(())
}

/// Plain-text rendering of a lesson.
pub fn render_lesson(lesson: &Lesson, image_files: &[PathBuf]) -> String {
    let result = lesson.result();
    let mut out = format!("{}\n", result.explanation());

    if let Some(code) = result.code() {
        out.push_str(&format!("\nCODE:\n{}\n", code));
    }
    if !lesson.dependencies().is_empty() {
        out.push_str(&format!(
            "\nDependencies: {}\n",
            lesson.dependencies().join(", ")
        ));
    }
    if let Some(path) = lesson.code_path() {
        out.push_str(&format!("\nCode file: {}\n", path.display()));
    }
    if let Some(script) = result.narration_script() {
        out.push_str(&format!("\nAUDIO SCRIPT:\n{}\n", script));
    }
    if let Some(path) = lesson.audio_path() {
        out.push_str(&format!("\nAudio file: {}\n", path.display()));
    }
    if !result.image_prompts().is_empty() {
        out.push_str("\nIMAGE PROMPTS:\n");
        for (i, prompt) in result.image_prompts().iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, prompt));
        }
    }
    if !lesson.images().is_empty() {
        out.push_str(&format!("\nGenerated {} image(s)\n", lesson.images().len()));
        for path in image_files {
            out.push_str(&format!("  {}\n", path.display()));
        }
    }
    out
}

/// Decode base64 images into `dir` as `image_<n>.png`, numbered from 1.
pub fn write_images(images: &[String], dir: &Path) -> TutorResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| ImageError::new(ImageErrorKind::Io(e.to_string())))?;

    let mut paths = Vec::with_capacity(images.len());
    for (i, encoded) in images.iter().enumerate() {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| ImageError::new(ImageErrorKind::Malformed(e.to_string())))?;
        let path = dir.join(format!("image_{}.png", i + 1));
        std::fs::write(&path, bytes)
            .map_err(|e| ImageError::new(ImageErrorKind::Io(e.to_string())))?;
        info!(path = %path.display(), "Wrote image");
        paths.push(path);
    }
    Ok(paths)
}
