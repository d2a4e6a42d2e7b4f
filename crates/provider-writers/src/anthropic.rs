//! Anthropic messages writer.

use async_trait::async_trait;
use post_core::{EventDetails, GenerationResult, PostWriter, ProviderError, Tone};
use reqwest::Client;
use tracing::debug;

use crate::api_types::{ChatMessage, MessagesRequest, MessagesResponse};
use crate::config::{ConfigError, ProviderConfig, ANTHROPIC_VERSION};
use crate::http::{build_client, send_json, shape_error, write_each_platform, CompletionEndpoint};

const PROVIDER: &str = "Anthropic";

/// A post writer backed by the Anthropic messages API.
pub struct AnthropicWriter {
    client: Client,
    config: ProviderConfig,
    api_key: String,
}

impl AnthropicWriter {
    /// Create a writer with its own HTTP client.
    pub fn new(config: ProviderConfig, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let client = build_client(&config)?;
        Ok(Self::with_client(client, config, api_key))
    }

    /// Create a writer sharing an existing HTTP client.
    pub fn with_client(client: Client, config: ProviderConfig, api_key: impl Into<String>) -> Self {
        Self {
            client,
            config,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CompletionEndpoint for AnthropicWriter {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/messages", self.config.anthropic_url);
        let request = MessagesRequest {
            model: self.config.anthropic_model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!("Sending request to Anthropic API: model={}", request.model);

        let response: MessagesResponse = send_json(
            PROVIDER,
            self.client
                .post(&url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("Content-Type", "application/json")
                .json(&request),
        )
        .await?;

        response
            .text()
            .map(str::to_string)
            .map_err(|detail| shape_error(PROVIDER, detail))
    }
}

#[async_trait]
impl PostWriter for AnthropicWriter {
    async fn write_posts(&self, event: &EventDetails, tone: Tone) -> GenerationResult {
        write_each_platform(self, event, tone).await
    }

    fn name(&self) -> &str {
        "AnthropicWriter"
    }
}
