//! The PostWriter trait definition.

use async_trait::async_trait;

use crate::event::{EventDetails, Tone};
use crate::result::GenerationResult;

/// A trait for turning event details into one post per platform.
///
/// Implementations range from offline templates to remote providers. This
/// trait is object-safe and can be used with `Box<dyn PostWriter>`.
#[async_trait]
pub trait PostWriter: Send + Sync {
    /// Generate posts for every platform.
    ///
    /// Failures are per platform and recorded in the returned result, so
    /// this never fails as a whole.
    async fn write_posts(&self, event: &EventDetails, tone: Tone) -> GenerationResult;

    /// Get a human-readable name for this writer.
    fn name(&self) -> &str;
}
