//! Test utilities for tutorgen tests.
//!
//! Fake backends and dispatchers that record what they were asked to do.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tutorgen::{
    AudioError, AudioErrorKind, AudioSynthesizer, GeminiError, GeminiErrorKind,
    GenerationBackend, ImageError, ImageErrorKind, ImageGenerator, Sleeper,
};

/// Backend that replays canned outcomes and records every instruction.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    outcomes: Mutex<Vec<Result<String, GeminiErrorKind>>>,
    instructions: Mutex<Vec<String>>,
}

impl RecordingBackend {
    /// Always answer with `text`.
    pub fn replying(text: &str) -> Self {
        Self::scripted(vec![Ok(text.to_string())])
    }

    /// Replay `outcomes` in order, repeating the last one.
    pub fn scripted(outcomes: Vec<Result<String, GeminiErrorKind>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            instructions: Mutex::new(Vec::new()),
        }
    }

    pub fn instructions(&self) -> Vec<String> {
        self.instructions.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for RecordingBackend {
    async fn generate_content(&self, instruction: &str) -> Result<String, GeminiError> {
        self.instructions
            .lock()
            .unwrap()
            .push(instruction.to_string());
        let mut outcomes = self.outcomes.lock().unwrap();
        let next = if outcomes.len() > 1 {
            outcomes.remove(0)
        } else {
            outcomes.first().cloned().expect("outcomes must not be empty")
        };
        next.map_err(GeminiError::new)
    }
}

/// Records requested waits and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// Image generator that echoes prompts, failing those containing `fail`.
#[derive(Debug, Default)]
pub struct FakeImages {
    prompts: Mutex<Vec<String>>,
}

impl FakeImages {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeImages {
    async fn generate_image(&self, prompt: &str) -> Result<String, ImageError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if prompt.contains("fail") {
            Err(ImageError::new(ImageErrorKind::NoImage))
        } else {
            Ok(format!("img:{}", prompt))
        }
    }
}

/// Audio synthesizer that records scripts and returns a fixed path.
#[derive(Debug, Default)]
pub struct FakeAudio {
    scripts: Mutex<Vec<(String, String)>>,
    broken: bool,
}

impl FakeAudio {
    /// A synthesizer whose every call fails.
    pub fn broken() -> Self {
        Self {
            scripts: Mutex::new(Vec::new()),
            broken: true,
        }
    }

    pub fn scripts(&self) -> Vec<(String, String)> {
        self.scripts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AudioSynthesizer for FakeAudio {
    async fn synthesize(&self, script: &str, topic: &str) -> Result<PathBuf, AudioError> {
        self.scripts
            .lock()
            .unwrap()
            .push((script.to_string(), topic.to_string()));
        if self.broken {
            Err(AudioError::new(AudioErrorKind::Synthesizer(
                "device busy".to_string(),
            )))
        } else {
            Ok(PathBuf::from("generated_audio/narration.wav"))
        }
    }
}
