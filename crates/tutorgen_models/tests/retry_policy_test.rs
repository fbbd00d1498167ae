//! Retry policy defaults, validation and cancellation tokens.

use std::time::Duration;
use tutorgen_models::{Cancellation, RetryPolicy, cancellation};

#[test]
fn test_default_policy() {
    let policy = RetryPolicy::default();
    assert_eq!(*policy.max_attempts(), 3);
    assert_eq!(policy.delay_after(1), Duration::from_secs(60));
    assert_eq!(policy.delay_after(2), Duration::from_secs(60));
}

#[test]
fn test_zero_attempts_rejected() {
    let err = RetryPolicy::new(0, Duration::from_secs(1)).unwrap_err();
    assert!(err.to_string().contains("retry.max_attempts"));
    assert!(RetryPolicy::new(1, Duration::ZERO).is_ok());
}

#[tokio::test]
async fn test_cancelled_resolves_after_cancel() {
    let (source, token) = cancellation();
    let waiter = tokio::spawn({
        let token = token.clone();
        async move { token.cancelled().await }
    });
    source.cancel();
    waiter.await.unwrap();
    assert!(token.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_never_does_not_resolve() {
    let token = Cancellation::never();
    let outcome = tokio::time::timeout(Duration::from_secs(3600), token.cancelled()).await;
    assert!(outcome.is_err());
    assert!(!token.is_cancelled());
}
