//! Presentation-side session state.
//!
//! A [`Session`] owns the latest result for one user. Each successful
//! generation replaces it wholesale; a blocked run leaves it untouched.

use post_core::{EventDetails, GenerationResult, ProviderIdentity, Tone};
use tracing::{debug, warn};

use crate::error::OrchestratorError;
use crate::orchestrator::Orchestrator;
use crate::service::ServiceOverride;

/// Where a session is in the generate cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing selected yet.
    Idle,
    /// A service has been resolved; waiting for a generate action.
    ServiceSelection,
    /// A run is in progress.
    Generating,
    /// The latest run's posts are available.
    Displaying,
}

/// State container driven by the presentation layer.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    service: ProviderIdentity,
    posts: GenerationResult,
    notices: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            service: ProviderIdentity::NotDetected,
            posts: GenerationResult::default(),
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The service chosen by the last selection.
    pub fn service(&self) -> ProviderIdentity {
        self.service
    }

    /// Posts from the latest successful run (empty drafts before any run).
    pub fn posts(&self) -> &GenerationResult {
        &self.posts
    }

    /// Notices from the latest successful run.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Re-derive the service. Called on every render.
    pub async fn select_service(
        &mut self,
        orchestrator: &Orchestrator,
        credential: &str,
        selection: ServiceOverride,
    ) -> ProviderIdentity {
        self.service = orchestrator.resolve_service(credential, selection).await;
        self.state = SessionState::ServiceSelection;
        self.service
    }

    /// Run a generation with the selected service.
    ///
    /// On validation failure the session stays in `ServiceSelection` and
    /// the previous posts are kept.
    pub async fn generate(
        &mut self,
        orchestrator: &Orchestrator,
        credential: &str,
        event: &EventDetails,
        tone: Tone,
    ) -> Result<&GenerationResult, OrchestratorError> {
        if self.state == SessionState::Idle {
            return Err(OrchestratorError::InvalidState(
                "select a service before generating".to_string(),
            ));
        }

        if let Err(err) = event.validate() {
            warn!("Generation blocked: {}", err);
            self.state = SessionState::ServiceSelection;
            return Err(err.into());
        }

        self.state = SessionState::Generating;
        debug!("Session generating with {}", self.service);

        let run = orchestrator
            .generate(self.service, credential, event, tone)
            .await?;

        self.posts = run.posts;
        self.notices = run.notices;
        self.state = SessionState::Displaying;

        Ok(&self.posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_core::{NoProbe, Platform};
    use provider_writers::ProviderConfig;

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(ProviderConfig::default())
            .unwrap()
            .with_probe(NoProbe)
    }

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.posts().has_content());
    }

    #[tokio::test]
    async fn test_generate_requires_selection() {
        let orch = orchestrator();
        let mut session = Session::new();
        let event = EventDetails::new("Tech Conf", "A great event");

        let result = session.generate(&orch, "", &event, Tone::Casual).await;
        assert!(matches!(result, Err(OrchestratorError::InvalidState(_))));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn test_full_cycle_with_mock() {
        let orch = orchestrator();
        let mut session = Session::new();

        let service = session.select_service(&orch, "", ServiceOverride::AutoDetect).await;
        assert_eq!(service, ProviderIdentity::NotDetected);
        assert_eq!(session.state(), SessionState::ServiceSelection);

        let event = EventDetails::new("Tech Conf", "A great event");
        let posts = session
            .generate(&orch, "", &event, Tone::Professional)
            .await
            .unwrap();
        assert!(posts.get(Platform::Twitter).text().contains("Join us for Tech Conf!"));
        assert_eq!(session.state(), SessionState::Displaying);
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_previous_posts() {
        let orch = orchestrator();
        let mut session = Session::new();
        session.select_service(&orch, "", ServiceOverride::Mock).await;

        let event = EventDetails::new("Tech Conf", "A great event");
        session
            .generate(&orch, "", &event, Tone::Sarcastic)
            .await
            .unwrap();
        let before = session.posts().clone();

        // Next render, then an invalid submit.
        session.select_service(&orch, "", ServiceOverride::Mock).await;
        let invalid = EventDetails::new("Tech Conf", "");
        let result = session.generate(&orch, "", &invalid, Tone::Casual).await;

        assert!(matches!(result, Err(OrchestratorError::Validation(_))));
        assert_eq!(session.state(), SessionState::ServiceSelection);
        assert_eq!(session.posts(), &before);
    }

    #[tokio::test]
    async fn test_new_run_replaces_posts() {
        let orch = orchestrator();
        let mut session = Session::new();
        session.select_service(&orch, "", ServiceOverride::Mock).await;

        let first = EventDetails::new("First Event", "One");
        session.generate(&orch, "", &first, Tone::Casual).await.unwrap();

        let second = EventDetails::new("Second Event", "Two");
        session.generate(&orch, "", &second, Tone::Casual).await.unwrap();

        for (_, post) in session.posts().iter() {
            assert!(!post.text().contains("First Event"));
            assert!(post.text().contains("Second Event"));
        }
    }
}
