//! Template-backed PostWriter.

use async_trait::async_trait;
use post_core::{EventDetails, GenerationResult, PostWriter, Tone};
use tracing::info;

use crate::templates;

/// A writer that renders posts from templates instead of calling a provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWriter;

impl MockWriter {
    /// Create a new MockWriter.
    pub fn new() -> Self {
        Self
    }

    /// Render all three posts synchronously.
    pub fn compose(&self, event: &EventDetails, tone: Tone) -> GenerationResult {
        templates::for_tone(tone).render(event)
    }
}

#[async_trait]
impl PostWriter for MockWriter {
    async fn write_posts(&self, event: &EventDetails, tone: Tone) -> GenerationResult {
        info!("Generating sample posts ({} tone)", tone);
        self.compose(event, tone)
    }

    fn name(&self) -> &str {
        "MockWriter"
    }
}
