//! Run configuration.
//!
//! Everything the classifier needs to reach the inference service lives in
//! [`ClassifierConfig`]; [`RunConfig`] adds the input and output paths. Both
//! default to the values in [`consts`](crate::consts), so a bare run reads
//! `articles.json` and asks a local Ollama.

use std::path::PathBuf;
use std::time::Duration;

use crate::consts::{
    DEFAULT_ENDPOINT, DEFAULT_INPUT, DEFAULT_MODEL, DEFAULT_OUTPUT, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT,
};

/// How to reach the inference service.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Full URL of the generate endpoint.
    pub endpoint: String,
    pub model: String,
    /// Applies to each request separately.
    pub timeout: Duration,
    pub temperature: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// A full load, classify, write cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub classifier: ClassifierConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            classifier: ClassifierConfig::default(),
        }
    }
}
