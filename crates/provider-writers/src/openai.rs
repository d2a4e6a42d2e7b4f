//! OpenAI chat-completions writer.

use async_trait::async_trait;
use post_core::{EventDetails, GenerationResult, PostWriter, ProviderError, Tone};
use reqwest::Client;
use tracing::debug;

use crate::api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::{ConfigError, ProviderConfig};
use crate::http::{build_client, send_json, shape_error, write_each_platform, CompletionEndpoint};

const PROVIDER: &str = "OpenAI";

/// A post writer backed by the OpenAI chat-completions API.
pub struct OpenAiWriter {
    client: Client,
    config: ProviderConfig,
    api_key: String,
}

impl OpenAiWriter {
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
impl CompletionEndpoint for OpenAiWriter {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.config.openai_url);
        let request = ChatCompletionRequest {
            model: self.config.openai_model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to OpenAI API: model={}", request.model);

        let completion: ChatCompletionResponse = send_json(
            PROVIDER,
            self.client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .json(&request),
        )
        .await?;

        completion
            .text()
            .map(str::to_string)
            .map_err(|detail| shape_error(PROVIDER, detail))
    }
}

#[async_trait]
impl PostWriter for OpenAiWriter {
    async fn write_posts(&self, event: &EventDetails, tone: Tone) -> GenerationResult {
        write_each_platform(self, event, tone).await
    }

    fn name(&self) -> &str {
        "OpenAiWriter"
    }
}
