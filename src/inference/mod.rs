pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use std::sync::Arc;

/// Token usage from a single generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    /// Accumulate another usage into this one.
    pub fn add(&mut self, other: TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }

    /// Total tokens (input + output).
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Raw text produced by the model, plus token usage when the service reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Generation {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// Why a generation call produced no usable text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    #[error("could not connect to inference service: {0}")]
    Connect(String),

    #[error("inference request timed out")]
    Timeout,

    #[error("inference service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("inference request failed: {0}")]
    Request(String),

    #[error("malformed inference response: {0}")]
    Decode(String),
}

/// Something that turns a prompt into text. Could be Ollama or a test script.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generation, InferenceError>;
}

#[async_trait]
impl<B: InferenceBackend + ?Sized> InferenceBackend for Arc<B> {
    async fn generate(&self, prompt: &str) -> Result<Generation, InferenceError> {
        (**self).generate(prompt).await
    }
}
