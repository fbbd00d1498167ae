//! Retry policy, injectable sleep, and cancellation for generation calls.

use async_trait::async_trait;
use derive_getters::Getters;
use std::time::Duration;
use tokio::sync::watch;
use tutorgen_error::ConfigError;

/// Default number of attempts, the first call included.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Default wait after a rate-limit response.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(60);

/// Fixed-delay retry policy for rate-limited calls.
///
/// Every wait uses the same `backoff`; `max_attempts` caps the total number
/// of calls, so at most `max_attempts - 1` waits happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RetryPolicy {
    max_attempts: usize,
    backoff: Duration,
}

impl RetryPolicy {
    /// Create a policy, rejecting a zero attempt budget.
    pub fn new(max_attempts: usize, backoff: Duration) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::invalid("retry.max_attempts", "must be at least 1"));
        }
        Ok(Self {
            max_attempts,
            backoff,
        })
    }

    /// Delay before the attempt following `attempts_made` failures.
    pub fn delay_after(&self, _attempts_made: usize) -> Duration {
        self.backoff
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// Something that can wait.
///
/// Production code sleeps on the tokio timer; tests record the requested
/// durations instead of waiting.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`.
    async fn sleep(&self, duration: Duration);
}

#[async_trait]
impl<T> Sleeper for &T
where
    T: Sleeper + ?Sized,
{
    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Triggers the paired [`Cancellation`].
#[derive(Debug)]
pub struct CancelSource {
    tx: watch::Sender<bool>,
}

impl CancelSource {
    /// Cancel every clone of the paired token.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Cancellation token observed by the generation retry loop.
#[derive(Debug, Clone)]
pub struct Cancellation {
    rx: watch::Receiver<bool>,
}

/// Create a linked cancel source and token.
///
/// # Examples
///
/// ```
/// use tutorgen_models::cancellation;
///
/// let (source, token) = cancellation();
/// assert!(!token.is_cancelled());
/// source.cancel();
/// assert!(token.is_cancelled());
/// ```
pub fn cancellation() -> (CancelSource, Cancellation) {
    let (tx, rx) = watch::channel(false);
    (CancelSource { tx }, Cancellation { rx })
}

impl Cancellation {
    /// A token that is never cancelled.
    pub fn never() -> Self {
        let (_, token) = cancellation();
        token
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once cancellation is requested. Pends forever if the source
    /// was dropped without cancelling.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::never()
    }
}
