//! Transport seam between retry logic and the remote service.

use async_trait::async_trait;
use tutorgen_error::GeminiError;

/// A single, non-retrying call to a text-generation service.
///
/// Implementations report throttling through an error whose
/// [`GeminiError::is_rate_limited`] returns true; the client decides
/// whether to wait and try again.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send `instruction` and return the raw generated text.
    async fn generate_content(&self, instruction: &str) -> Result<String, GeminiError>;
}

#[async_trait]
impl<T> GenerationBackend for std::sync::Arc<T>
where
    T: GenerationBackend + ?Sized,
{
    async fn generate_content(&self, instruction: &str) -> Result<String, GeminiError> {
        (**self).generate_content(instruction).await
    }
}

#[async_trait]
impl<T> GenerationBackend for &T
where
    T: GenerationBackend + ?Sized,
{
    async fn generate_content(&self, instruction: &str) -> Result<String, GeminiError> {
        (**self).generate_content(instruction).await
    }
}
