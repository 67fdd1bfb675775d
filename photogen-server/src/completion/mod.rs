//! Multimodal completion: prompt, client and response parsing
//!
//! The HTTP layer only sees [`CompletionClient`]; tests swap in a stub.

pub mod openai;
pub mod parse;
pub mod prompt;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub use openai::OpenAiClient;
pub use parse::{parse_completion, ParsedCompletion};
pub use prompt::PromptRequest;

/// Completion error type
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response contained no text output")]
    EmptyOutput,

    #[error("model did not return JSON ({reason}); raw output: {raw}")]
    Parse { reason: String, raw: String },

    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Image embedded in a completion request
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Declared media type, e.g. `image/jpeg`
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes,
        }
    }

    /// `data:<type>;base64,<payload>` URL for inline upload
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.bytes)
        )
    }
}

/// A service that turns an instruction plus an image into free-form text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one request and return the raw text output.
    async fn complete(&self, instruction: &str, image: &ImageInput)
        -> Result<String, CompletionError>;
}
