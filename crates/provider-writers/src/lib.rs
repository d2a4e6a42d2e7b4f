//! Provider-backed post writers.
//!
//! This crate provides [`PostWriter`] implementations that send one prompt
//! per platform to a hosted text-generation API:
//!
//! - [`OpenAiWriter`] - OpenAI chat completions
//! - [`GeminiWriter`] - Google Gemini generateContent
//! - [`AnthropicWriter`] - Anthropic messages
//!
//! It also provides [`OpenAiKeyProbe`], the network fallback used when a
//! credential matches none of the known key patterns.
//!
//! Requests run one platform at a time. Each platform's failure is recorded
//! in the returned [`GenerationResult`] and never stops the run.
//!
//! # Example
//!
//! ```rust,no_run
//! use provider_writers::{OpenAiWriter, ProviderConfig};
//! use post_core::{EventDetails, PostWriter, Tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let writer = OpenAiWriter::new(ProviderConfig::from_env()?, "sk-...")?;
//!     let event = EventDetails::new("Tech Conf", "Two days of talks");
//!     let posts = writer.write_posts(&event, Tone::Casual).await;
//!     for (platform, post) in posts.iter() {
//!         println!("{}: {}", platform, post);
//!     }
//!     Ok(())
//! }
//! ```

mod anthropic;
mod api_types;
mod config;
mod gemini;
mod http;
mod openai;
mod probe;

pub use anthropic::AnthropicWriter;
pub use config::{
    ConfigError, ProviderConfig, ProviderConfigBuilder, ANTHROPIC_VERSION, DEFAULT_ANTHROPIC_URL,
    DEFAULT_GEMINI_URL, DEFAULT_OPENAI_URL,
};
pub use gemini::GeminiWriter;
pub use http::build_client;
pub use openai::OpenAiWriter;
pub use probe::OpenAiKeyProbe;

// Re-export post-core types for convenience
pub use post_core::{GenerationResult, PostOutcome, PostWriter, ProviderError};
