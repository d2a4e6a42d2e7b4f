//! Core trait and types for social post generators.
//!
//! This crate provides the shared interface for every post generator in the
//! workspace. It defines:
//!
//! - [`PostWriter`] - The trait that all generators implement
//! - [`EventDetails`] / [`Tone`] / [`Platform`] - Generation inputs
//! - [`GenerationResult`] / [`PostOutcome`] - Per-platform outputs
//! - [`ProviderIdentity`] and the credential [`classify`] rules
//! - [`build_prompt`] - The per-platform prompt text
//!
//! # Example
//!
//! ```rust
//! use post_core::{async_trait, EventDetails, GenerationResult, PostOutcome, PostWriter, Tone};
//!
//! struct ShoutWriter;
//!
//! #[async_trait]
//! impl PostWriter for ShoutWriter {
//!     async fn write_posts(&self, event: &EventDetails, _tone: Tone) -> GenerationResult {
//!         let shout = PostOutcome::Draft(event.name.to_uppercase());
//!         GenerationResult::new(shout.clone(), shout.clone(), shout)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ShoutWriter"
//!     }
//! }
//! ```

mod classifier;
mod error;
mod event;
mod prompt;
mod result;
mod trait_def;

pub use classifier::{classify, classify_pattern, CredentialProbe, NoProbe, ProviderIdentity};
pub use error::{ParseError, ProviderError, ValidationError};
pub use event::{EventDetails, Platform, Tone};
pub use prompt::{build_prompt, format_event_info, hash_prompt};
pub use result::{GenerationResult, PostOutcome, PostStats};
pub use trait_def::PostWriter;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
