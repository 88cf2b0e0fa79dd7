//! Generation service boundary.
//!
//! Everything that talks to (or prepares content for) the external HTML/CSS
//! generation service: request payloads and transport, tolerant response
//! parsing, the prompt templates, and preview-document composition. Nothing
//! here touches the drawing model; a failed generation never mutates the
//! user's drawing.

mod client;
mod preview;
mod prompt;

pub use client::{GenerateClient, GenerateError, GeneratedPage};
pub use preview::compose_preview_document;
pub use prompt::{drawing_prompt, prompt_for_description};
