//! Generation calls with rate-limit retry.

use crate::{
    Cancellation, GeminiBackend, GeminiConfig, GenerationBackend, RetryPolicy, Sleeper,
    TokioSleeper,
};
use tracing::{debug, error, info, instrument, warn};
use tutorgen_error::{GeminiError, GenerationError, GenerationErrorKind};

/// Attempt bookkeeping for one call.
#[derive(Debug, Clone, Copy)]
struct RetryState {
    attempts_made: usize,
    max_attempts: usize,
}

impl RetryState {
    fn new(max_attempts: usize) -> Self {
        Self {
            attempts_made: 0,
            max_attempts,
        }
    }

    fn exhausted(&self) -> bool {
        self.attempts_made >= self.max_attempts
    }
}

/// Sends instruction text to a backend, waiting out rate limits.
///
/// Rate-limit failures are retried after a fixed backoff until the policy's
/// attempt cap is reached; every other failure ends the call immediately.
/// The client holds no mutable state, so one instance can serve concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct GenerationClient<B, S = TokioSleeper> {
    backend: B,
    policy: RetryPolicy,
    sleeper: S,
}

impl GenerationClient<GeminiBackend, TokioSleeper> {
    /// Gemini client with the default retry policy.
    pub fn gemini(config: GeminiConfig) -> Result<Self, GeminiError> {
        Ok(Self::new(
            GeminiBackend::new(config)?,
            RetryPolicy::default(),
            TokioSleeper,
        ))
    }
}

impl<B, S> GenerationClient<B, S>
where
    B: GenerationBackend,
    S: Sleeper,
{
    /// Create a client from its parts.
    pub fn new(backend: B, policy: RetryPolicy, sleeper: S) -> Self {
        Self {
            backend,
            policy,
            sleeper,
        }
    }

    /// Returns the retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate raw text for `instruction`, without cancellation.
    ///
    /// # Errors
    ///
    /// [`GenerationErrorKind::RateLimited`] once the attempt budget is spent on
    /// throttling; [`GenerationErrorKind::Unexpected`] for anything else.
    pub async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        self.generate_with_cancel(instruction, &Cancellation::never())
            .await
    }

    /// Generate raw text for `instruction`.
    ///
    /// A cancelled token observed before an attempt or during a backoff wait
    /// ends the call with [`GenerationErrorKind::Cancelled`].
    #[instrument(skip(self, instruction, cancel), fields(prompt_len = instruction.len(), max_attempts = *self.policy.max_attempts()))]
    pub async fn generate_with_cancel(
        &self,
        instruction: &str,
        cancel: &Cancellation,
    ) -> Result<String, GenerationError> {
        let mut state = RetryState::new(*self.policy.max_attempts());

        loop {
            if cancel.is_cancelled() {
                info!(attempts = state.attempts_made, "Generation cancelled");
                return Err(GenerationError::new(GenerationErrorKind::Cancelled));
            }

            state.attempts_made += 1;
            debug!(attempt = state.attempts_made, "Calling generation backend");

            let err = match self.backend.generate_content(instruction).await {
                Ok(text) => {
                    if state.attempts_made > 1 {
                        debug!(attempt = state.attempts_made, "Generation succeeded after retry");
                    }
                    return Ok(text);
                }
                Err(err) => err,
            };

            if !err.is_rate_limited() {
                error!(error = %err, "Unexpected error during generation call");
                return Err(GenerationError::new(GenerationErrorKind::Unexpected(
                    err.kind.to_string(),
                )));
            }

            if state.exhausted() {
                error!(
                    attempts = state.attempts_made,
                    "Generation failed after multiple retries due to rate limiting"
                );
                return Err(GenerationError::new(GenerationErrorKind::RateLimited {
                    attempts: state.attempts_made,
                }));
            }

            let delay = self.policy.delay_after(state.attempts_made);
            warn!(
                attempt = state.attempts_made,
                max_attempts = state.max_attempts,
                wait_secs = delay.as_secs(),
                "Rate limit hit, waiting before retrying"
            );

            tokio::select! {
                _ = self.sleeper.sleep(delay) => {}
                _ = cancel.cancelled() => {
                    info!(attempts = state.attempts_made, "Generation cancelled during backoff");
                    return Err(GenerationError::new(GenerationErrorKind::Cancelled));
                }
            }
        }
    }
}
