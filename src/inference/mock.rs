use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Generation, InferenceBackend, InferenceError};

/// A scripted backend for tests. Returns pre-defined replies in order and
/// records every prompt it was given.
pub struct MockBackend {
    replies: Vec<Result<Generation, InferenceError>>,
    index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new(replies: Vec<Result<Generation, InferenceError>>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Convenience: every reply succeeds with the given text.
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(Generation::text(*t))).collect())
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn generate(&self, prompt: &str) -> Result<Generation, InferenceError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.replies.get(i).cloned().unwrap_or_else(|| {
            Err(InferenceError::Request(format!(
                "MockBackend: no more replies (called {} times)",
                i + 1
            )))
        })
    }
}
