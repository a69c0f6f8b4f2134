pub mod article;
pub mod banner;
pub mod category;
pub mod classifier;
pub mod config;
pub mod consts;
pub mod inference;
pub mod logging;
pub mod pipeline;
pub mod prompts;
pub mod store;
