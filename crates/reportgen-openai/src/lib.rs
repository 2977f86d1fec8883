//! reportgen-openai
//!
//! Text and image generation over the OpenAI HTTP API.

pub mod chat;
pub mod client;
pub mod error;
pub mod image;

pub use chat::ContentGenerator;
pub use client::{OpenAiClient, OpenAiConfig};
pub use error::OpenAiError;
pub use image::{GeneratedImage, ImageGenerator};
