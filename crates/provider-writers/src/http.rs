//! HTTP plumbing shared by the provider writers.

use async_trait::async_trait;
use post_core::{
    build_prompt, format_event_info, hash_prompt, EventDetails, GenerationResult, Platform,
    PostOutcome, ProviderError, Tone,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ProviderConfig};

/// Build the HTTP client used for generation requests.
pub fn build_client(config: &ProviderConfig) -> Result<Client, ConfigError> {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))
}

/// One provider's prompt-to-text request.
#[async_trait]
pub(crate) trait CompletionEndpoint: Send + Sync {
    /// Provider name used in error text and logs.
    fn provider(&self) -> &'static str;

    /// Send one prompt and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Run one request per platform, in order, recording each outcome.
///
/// A failure on one platform never affects the others.
pub(crate) async fn write_each_platform<E: CompletionEndpoint + ?Sized>(
    endpoint: &E,
    event: &EventDetails,
    tone: Tone,
) -> GenerationResult {
    let provider = endpoint.provider();
    let event_info = format_event_info(event);
    let mut posts = GenerationResult::default();

    info!("Generating posts with {} ({} tone)", provider, tone);

    for platform in Platform::ALL {
        let prompt = build_prompt(platform, &event_info, tone);
        debug!(
            "{} prompt for {} (fingerprint {})",
            provider,
            platform,
            hash_prompt(&prompt)
        );

        let outcome = match endpoint.complete(&prompt).await {
            Ok(text) => PostOutcome::Draft(text.trim().to_string()),
            Err(err) => {
                warn!("{} failed for {}: {}", provider, platform, err);
                PostOutcome::Failed(err)
            }
        };
        posts.set(platform, outcome);
    }

    info!(
        "{} finished: {} of {} platforms failed",
        provider,
        posts.failure_count(),
        Platform::ALL.len()
    );

    posts
}

/// Send a request and decode a successful JSON body.
///
/// Transport failures, non-success statuses and undecodable bodies map to
/// the matching [`ProviderError`] variant.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    if !status.is_success() {
        let body = if body.is_empty() {
            "Unknown error".to_string()
        } else {
            body
        };
        return Err(ProviderError::Http {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::ResponseShape {
        provider,
        detail: e.to_string(),
    })
}

/// Turn a response-path lookup miss into a shape error.
pub(crate) fn shape_error(provider: &'static str, detail: &str) -> ProviderError {
    ProviderError::ResponseShape {
        provider,
        detail: detail.to_string(),
    }
}
