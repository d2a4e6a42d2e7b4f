//! Service selection and dispatch for social post generation.
//!
//! This crate provides the [`Orchestrator`] type, which decides which service
//! handles a run and dispatches to the matching writer, and the [`Session`]
//! state machine the presentation layer drives.
//!
//! # Architecture
//!
//! ```text
//! credential + manual selection
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Resolve service                                         │
//! │     • manual selection (not Auto-detect) → use it           │
//! │     • otherwise classify credential (patterns, then probe)  │
//! │         ↓                                                   │
//! │  2. Validate event (name + description required)            │
//! │         ↓                                                   │
//! │  3. Dispatch                                                │
//! │     • OpenAI / Gemini / Anthropic → provider writer         │
//! │     • Unknown / Mock / Not Detected → mock writer           │
//! │         ↓                                                   │
//! │  4. Return GenerationRun (posts + notices)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use orchestrator::{Orchestrator, ServiceOverride, Session};
//! use post_core::{EventDetails, Tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::from_env()?;
//!     let mut session = Session::new();
//!
//!     session.select_service(&orchestrator, "", ServiceOverride::AutoDetect).await;
//!     let event = EventDetails::new("Tech Conf", "A great event");
//!     let posts = session.generate(&orchestrator, "", &event, Tone::Casual).await?;
//!
//!     for (platform, post) in posts.iter() {
//!         println!("{}: {}", platform, post);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod orchestrator;
mod service;
mod session;

// Public exports
pub use error::OrchestratorError;
pub use orchestrator::{GenerationRun, Orchestrator, GEMINI_NOTICE};
pub use service::ServiceOverride;
pub use session::{Session, SessionState};

// Re-export commonly used types from dependencies
pub use post_core::{EventDetails, GenerationResult, Platform, ProviderIdentity, Tone};
pub use provider_writers::ProviderConfig;
