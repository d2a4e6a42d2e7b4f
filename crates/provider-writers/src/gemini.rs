//! Gemini generateContent writer.

use async_trait::async_trait;
use post_core::{EventDetails, GenerationResult, PostWriter, ProviderError, Tone};
use reqwest::Client;
use tracing::debug;

use crate::api_types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::{ConfigError, ProviderConfig};
use crate::http::{build_client, send_json, shape_error, write_each_platform, CompletionEndpoint};

const PROVIDER: &str = "Gemini";

/// A post writer backed by the Gemini generateContent API.
///
/// The credential travels as the `key` query parameter, not as a header.
pub struct GeminiWriter {
    client: Client,
    config: ProviderConfig,
    api_key: String,
}

impl GeminiWriter {
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

    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_tokens,
            top_p: self.config.gemini_top_p,
            top_k: self.config.gemini_top_k,
        }
    }
}

#[async_trait]
impl CompletionEndpoint for GeminiWriter {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1/models/{}:generateContent",
            self.config.gemini_url, self.config.gemini_model
        );
        let request = GenerateContentRequest::single_text(prompt, self.generation_config());

        debug!("Sending request to Gemini API: model={}", self.config.gemini_model);

        let response: GenerateContentResponse = send_json(
            PROVIDER,
            self.client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
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
impl PostWriter for GeminiWriter {
    async fn write_posts(&self, event: &EventDetails, tone: Tone) -> GenerationResult {
        write_each_platform(self, event, tone).await
    }

    fn name(&self) -> &str {
        "GeminiWriter"
    }
}
