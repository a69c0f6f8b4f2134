//! Project-wide constants.

use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Ollama generate endpoint on the local machine.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Default Ollama model when none is specified.
pub const DEFAULT_MODEL: &str = "mistral:latest";

/// Per-request timeout for a single classification call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Low temperature biases the model toward the same answer every time.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

pub const DEFAULT_INPUT: &str = "articles.json";
pub const DEFAULT_OUTPUT: &str = "articles_organized_by_ollama.json";

/// Shown in progress output for articles without a title.
pub const NO_TITLE: &str = "No Title";
