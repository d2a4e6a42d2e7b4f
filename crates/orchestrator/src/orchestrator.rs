//! Service resolution and writer dispatch.

use mock_writer::MockWriter;
use post_core::{
    classify, CredentialProbe, EventDetails, GenerationResult, PostWriter, ProviderIdentity, Tone,
};
use provider_writers::{
    build_client, AnthropicWriter, GeminiWriter, OpenAiKeyProbe, OpenAiWriter, ProviderConfig,
};
use reqwest::Client;
use tracing::{debug, info};

use crate::error::OrchestratorError;
use crate::service::ServiceOverride;

/// Advisory shown whenever Gemini is used.
pub const GEMINI_NOTICE: &str = "Using Gemini API. If you encounter errors, verify your API key and check that you have access to the Gemini Pro model.";

/// Outcome of one completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationRun {
    /// Service the run was dispatched to.
    pub service: ProviderIdentity,
    /// One outcome per platform.
    pub posts: GenerationResult,
    /// Advisory messages for the user.
    pub notices: Vec<String>,
}

/// Picks a service for each run and dispatches to the matching writer.
///
/// The orchestrator holds no per-run state: every call to
/// [`generate`](Self::generate) returns a fresh [`GenerationRun`].
pub struct Orchestrator {
    client: Client,
    config: ProviderConfig,
    probe: Box<dyn CredentialProbe>,
}

impl Orchestrator {
    /// Create an orchestrator that probes unknown credentials against OpenAI.
    pub fn new(config: ProviderConfig) -> Result<Self, OrchestratorError> {
        let client = build_client(&config)?;
        let probe = OpenAiKeyProbe::with_client(client.clone(), config.clone());

        info!("Orchestrator initialized");

        Ok(Self {
            client,
            config,
            probe: Box::new(probe),
        })
    }

    /// Create an orchestrator from environment variables.
    ///
    /// See [`ProviderConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, OrchestratorError> {
        Self::new(ProviderConfig::from_env()?)
    }

    /// Replace the credential probe.
    pub fn with_probe(mut self, probe: impl CredentialProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Decide which service to use.
    ///
    /// A manual selection wins outright and skips detection.
    pub async fn resolve_service(
        &self,
        credential: &str,
        selection: ServiceOverride,
    ) -> ProviderIdentity {
        if let Some(forced) = selection.forced() {
            debug!("Service manually selected: {}", forced);
            return forced;
        }

        let detected = classify(credential, self.probe.as_ref()).await;
        debug!("Service auto-detected: {}", detected);
        detected
    }

    /// Build the writer for a service.
    pub fn writer_for(&self, service: ProviderIdentity, credential: &str) -> Box<dyn PostWriter> {
        let client = self.client.clone();
        let config = self.config.clone();

        match service {
            ProviderIdentity::OpenAi => {
                Box::new(OpenAiWriter::with_client(client, config, credential))
            }
            ProviderIdentity::Gemini => {
                Box::new(GeminiWriter::with_client(client, config, credential))
            }
            ProviderIdentity::Anthropic => {
                Box::new(AnthropicWriter::with_client(client, config, credential))
            }
            ProviderIdentity::Unknown | ProviderIdentity::Mock | ProviderIdentity::NotDetected => {
                Box::new(MockWriter::new())
            }
        }
    }

    /// Generate posts for all platforms with the given service.
    ///
    /// Fails only when the event is missing required fields; provider
    /// failures are recorded per platform in the returned run.
    pub async fn generate(
        &self,
        service: ProviderIdentity,
        credential: &str,
        event: &EventDetails,
        tone: Tone,
    ) -> Result<GenerationRun, OrchestratorError> {
        event.validate()?;

        let mut notices = Vec::new();
        if service == ProviderIdentity::Gemini {
            notices.push(GEMINI_NOTICE.to_string());
        }

        let writer = self.writer_for(service, credential);
        info!("Generating posts for {} via {}", event.name, writer.name());

        let posts = writer.write_posts(event, tone).await;

        Ok(GenerationRun {
            service,
            posts,
            notices,
        })
    }
}
