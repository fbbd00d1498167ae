//! Core data types for the tutorgen educational content generator.
//!
//! This crate provides the request and result types shared by the prompt
//! builder, the response parser, and the generation client.

mod depth;
mod mode;
mod request;
mod result;

pub use depth::Depth;
pub use mode::Mode;
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use result::GenerationResult;
