//! Test utilities for tutorgen_models tests.
//!
//! Scripted backends and a sleeper that records waits instead of sleeping.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tutorgen_error::{GeminiError, GeminiErrorKind};
use tutorgen_models::{GenerationBackend, Sleeper};

/// One scripted backend outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text
    Text(String),
    /// Respond as throttled
    RateLimited,
    /// Fail with a non-retryable error
    Failure(GeminiErrorKind),
}

/// Backend that replays a fixed script, then keeps repeating the last entry.
#[derive(Debug)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<MockResponse>>,
    last: Mutex<Option<MockResponse>>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(script: impl IntoIterator<Item = MockResponse>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_content(&self, _instruction: &str) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = {
            let mut script = self.script.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            match script.pop_front() {
                Some(response) => {
                    *last = Some(response.clone());
                    response
                }
                None => last.clone().expect("script must not be empty"),
            }
        };
        match next {
            MockResponse::Text(text) => Ok(text),
            MockResponse::RateLimited => Err(GeminiError::new(
                GeminiErrorKind::ResourceExhausted("quota exceeded".to_string()),
            )),
            MockResponse::Failure(kind) => Err(GeminiError::new(kind)),
        }
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

/// Never finishes sleeping.
#[derive(Debug, Default)]
pub struct StuckSleeper;

#[async_trait]
impl Sleeper for StuckSleeper {
    async fn sleep(&self, _duration: Duration) {
        std::future::pending::<()>().await;
    }
}
