//! Request-to-lesson orchestration.

use derive_getters::Getters;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use tutorgen_content::{MarkerParser, PromptBuilder, ResponseParser, detect_dependencies};
use tutorgen_core::{GenerationRequest, GenerationResult, Mode};
use tutorgen_error::TutorResult;
use tutorgen_models::{
    AudioSynthesizer, Cancellation, CodeArchive, GenerationBackend, GenerationClient,
    ImageGenerator, Sleeper, TokioSleeper, generate_images, synthesize_narration,
};

/// A parsed result plus whatever the downstream services produced from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Getters)]
pub struct Lesson {
    /// Parsed generation output
    result: GenerationResult,
    /// Narration audio, in audio mode when synthesis succeeded
    audio_path: Option<PathBuf>,
    /// Base64 images, in image mode, one per successfully rendered prompt
    images: Vec<String>,
    /// Saved program, in code mode when archiving succeeded
    code_path: Option<PathBuf>,
    /// Packages the extracted program imports, in code mode
    dependencies: Vec<String>,
}

impl Lesson {
    /// A lesson with nothing dispatched yet.
    pub fn new(result: GenerationResult) -> Self {
        Self {
            result,
            ..Self::default()
        }
    }

    /// Attach a narration file.
    pub fn with_audio_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio_path = Some(path.into());
        self
    }

    /// Attach rendered images.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Attach a saved program.
    pub fn with_code_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.code_path = Some(path.into());
        self
    }

    /// Attach detected package names.
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// Builds prompts, generates, parses, and dispatches.
///
/// Downstream services are optional; without one, the matching payload stays
/// in the parsed result and nothing is dispatched.
pub struct Tutor<B, S = TokioSleeper> {
    prompts: PromptBuilder,
    client: GenerationClient<B, S>,
    parser: Arc<dyn ResponseParser + Send + Sync>,
    images: Option<Arc<dyn ImageGenerator>>,
    audio: Option<Arc<dyn AudioSynthesizer>>,
    code: Option<CodeArchive>,
}

impl<B, S> Tutor<B, S>
where
    B: GenerationBackend,
    S: Sleeper,
{
    /// Tutor with the marker parser and no downstream services.
    pub fn new(client: GenerationClient<B, S>) -> Self {
        Self {
            prompts: PromptBuilder,
            client,
            parser: Arc::new(MarkerParser),
            images: None,
            audio: None,
            code: None,
        }
    }

    /// Replace the response parser.
    pub fn with_parser(mut self, parser: Arc<dyn ResponseParser + Send + Sync>) -> Self {
        self.parser = parser;
        self
    }

    /// Render image prompts with `generator`.
    pub fn with_images(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.images = Some(generator);
        self
    }

    /// Synthesize narration scripts with `synthesizer`.
    pub fn with_audio(mut self, synthesizer: Arc<dyn AudioSynthesizer>) -> Self {
        self.audio = Some(synthesizer);
        self
    }

    /// Save extracted programs into `archive`.
    pub fn with_code_archive(mut self, archive: CodeArchive) -> Self {
        self.code = Some(archive);
        self
    }

    /// Produce a lesson for `request`.
    ///
    /// # Errors
    ///
    /// Only generation can fail; a failed generation skips dispatch entirely.
    /// Downstream failures are logged and leave the lesson's matching field
    /// empty.
    #[instrument(skip(self, request, cancel), fields(topic = %request.topic(), mode = %request.mode(), depth = %request.depth()))]
    pub async fn explain(
        &self,
        request: &GenerationRequest,
        cancel: &Cancellation,
    ) -> TutorResult<Lesson> {
        let prompt = self.prompts.build(request);
        let raw = self.client.generate_with_cancel(&prompt, cancel).await?;
        let result = self.parser.parse(&raw, *request.mode());
        info!(
            explanation_len = result.explanation().len(),
            has_code = result.code().is_some(),
            has_script = result.narration_script().is_some(),
            image_prompts = result.image_prompts().len(),
            "Parsed generated content"
        );

        let mut lesson = Lesson::default();

        match request.mode() {
            Mode::CodeWithExplanation => {
                if let Some(code) = result.code() {
                    lesson.dependencies = detect_dependencies(code);
                    if let Some(archive) = &self.code {
                        match archive.save(code, request.topic()).await {
                            Ok(path) => lesson.code_path = Some(path),
                            Err(e) => warn!(error = %e, "Saving code failed"),
                        }
                    }
                }
            }
            Mode::Audio => match (result.narration_script(), &self.audio) {
                (Some(script), Some(synthesizer)) => {
                    match synthesize_narration(synthesizer.as_ref(), script, request.topic())
                        .await
                    {
                        Ok(path) => lesson.audio_path = Some(path),
                        Err(e) => warn!(error = %e, "Audio synthesis failed"),
                    }
                }
                (Some(_), None) => debug!("No audio synthesizer configured, skipping narration"),
                (None, _) => {}
            },
            Mode::ImageExplanation => match &self.images {
                Some(generator) if !result.image_prompts().is_empty() => {
                    lesson.images = generate_images(generator.as_ref(), result.image_prompts()).await;
                }
                _ => {}
            },
            Mode::TextOnly => {}
        }

        lesson.result = result;
        Ok(lesson)
    }
}
