//! Offline post writer for runs without a usable provider.
//!
//! [`MockWriter`] fills every platform from fixed templates, with no
//! network access. Output depends only on the event details and tone.
//!
//! # Example
//!
//! ```rust
//! use mock_writer::MockWriter;
//! use post_core::{EventDetails, Platform, Tone};
//!
//! let event = EventDetails::new("Tech Conf", "A great event");
//! let posts = MockWriter::new().compose(&event, Tone::Casual);
//!
//! assert!(posts.get(Platform::Twitter).text().starts_with("Join us for Tech Conf!"));
//! ```

mod templates;
mod writer;

pub use writer::MockWriter;

// Re-export post-core types for convenience
pub use post_core::{async_trait, GenerationResult, PostWriter};
