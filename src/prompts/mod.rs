pub mod classify;

pub use classify::build_classify_prompt;
