//! Assigns a [`Category`] to one article at a time.
//!
//! [`Classifier::try_classify`] keeps the reason a classification failed;
//! [`Classifier::classify`] never fails and files anything it cannot trust
//! under [`Category::FALLBACK`].

use std::time::Instant;

use anyhow::Result;

use crate::article::Article;
use crate::category::Category;
use crate::config::ClassifierConfig;
use crate::inference::ollama::OllamaBackend;
use crate::inference::{InferenceBackend, InferenceError, TokenUsage};
use crate::prompts::build_classify_prompt;

/// Why an article could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("model returned an invalid category: '{label}'")]
    InvalidLabel { label: String },
}

/// A successful classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labelled {
    pub category: Category,
    pub usage: Option<TokenUsage>,
}

/// The category an article ends up with, and why if it was a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub category: Category,
    pub usage: Option<TokenUsage>,
    pub fallback: Option<ClassifyError>,
}

impl Verdict {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

pub struct Classifier {
    backend: Box<dyn InferenceBackend>,
}

impl Classifier {
    pub fn new(backend: Box<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    /// A classifier talking to Ollama as described by `config`.
    pub fn ollama(config: &ClassifierConfig) -> Result<Self> {
        Ok(Self::new(Box::new(OllamaBackend::new(config)?)))
    }

    pub async fn try_classify(&self, article: &Article) -> Result<Labelled, ClassifyError> {
        let prompt = build_classify_prompt(article);
        let generation = self.backend.generate(&prompt).await?;

        let category =
            Category::from_label(&generation.text).map_err(|_| ClassifyError::InvalidLabel {
                label: generation.text.trim().to_string(),
            })?;

        Ok(Labelled {
            category,
            usage: generation.usage,
        })
    }

    /// Classify an article. Every failure is logged and collapsed into
    /// [`Category::FALLBACK`].
    pub async fn classify(&self, article: &Article) -> Verdict {
        let started = Instant::now();
        match self.try_classify(article).await {
            Ok(Labelled { category, usage }) => {
                tracing::debug!(
                    %category,
                    elapsed = ?started.elapsed(),
                    "classified"
                );
                Verdict {
                    category,
                    usage,
                    fallback: None,
                }
            }
            Err(err) => {
                log_fallback(&err);
                Verdict {
                    category: Category::FALLBACK,
                    usage: None,
                    fallback: Some(err),
                }
            }
        }
    }
}

fn log_fallback(err: &ClassifyError) {
    match err {
        ClassifyError::InvalidLabel { .. } => {
            tracing::warn!("{err}. Falling back to '{}'.", Category::FALLBACK);
        }
        ClassifyError::Inference(InferenceError::Connect(_)) => {
            tracing::warn!(
                "{err}. Please ensure Ollama is installed and the model is running. Falling back to '{}'.",
                Category::FALLBACK
            );
        }
        ClassifyError::Inference(_) => {
            tracing::warn!("{err}. Falling back to '{}'.", Category::FALLBACK);
        }
    }
}
