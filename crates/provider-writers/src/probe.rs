//! Live credential probe against the OpenAI models listing.

use async_trait::async_trait;
use post_core::CredentialProbe;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::{ConfigError, ProviderConfig};
use crate::http::build_client;

/// Checks a credential with one `GET /v1/models` call.
///
/// Single attempt, bounded by the configured probe timeout. Any error or
/// non-200 status counts as "not accepted".
pub struct OpenAiKeyProbe {
    client: Client,
    config: ProviderConfig,
}

impl OpenAiKeyProbe {
    /// Create a probe with its own HTTP client.
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let client = build_client(&config)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a probe sharing an existing HTTP client.
    pub fn with_client(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl CredentialProbe for OpenAiKeyProbe {
    async fn accepts(&self, credential: &str) -> bool {
        let url = format!("{}/v1/models", self.config.openai_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", credential))
            .header("Content-Type", "application/json")
            .timeout(self.config.probe_timeout)
            .send()
            .await;

        match response {
            Ok(resp) => {
                debug!("OpenAI key probe answered {}", resp.status());
                resp.status() == StatusCode::OK
            }
            Err(e) => {
                debug!("OpenAI key probe failed: {}", e);
                false
            }
        }
    }
}
