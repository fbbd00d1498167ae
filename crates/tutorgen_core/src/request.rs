//! Generation request.

use crate::{Depth, Mode};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What the caller wants explained, how deeply, and in which shape.
///
/// Fields are private; a request is immutable once built.
///
/// # Examples
///
/// ```
/// use tutorgen_core::{Depth, GenerationRequest, Mode};
///
/// let request = GenerationRequest::builder()
///     .topic("gradient descent")
///     .depth(Depth::Brief)
///     .mode(Mode::Audio)
///     .build()
///     .unwrap();
/// assert_eq!(request.topic(), "gradient descent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Subject to explain
    topic: String,
    /// Explanation depth
    #[builder(default)]
    depth: Depth,
    /// Output shape
    #[builder(default)]
    mode: Mode,
}

impl GenerationRequest {
    /// Creates a new builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Convenience constructor.
    pub fn new(topic: impl Into<String>, depth: Depth, mode: Mode) -> Self {
        Self {
            topic: topic.into(),
            depth,
            mode,
        }
    }
}
