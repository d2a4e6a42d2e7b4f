//! Request and response types for the provider APIs.
//!
//! Response types only model the fields we read. Everything is optional or
//! defaulted so that shape problems surface as a lookup miss with a precise
//! message rather than a generic deserialization error.

use serde::{Deserialize, Serialize};

/// A chat message (OpenAI and Anthropic share this shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// ============================================================================
// OpenAI
// ============================================================================

/// Chat completion request to the OpenAI API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Chat completion response from the OpenAI API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Content (may be null)
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text at `choices[0].message.content`.
    pub fn text(&self) -> Result<&str, &'static str> {
        self.choices
            .first()
            .ok_or("missing choices[0]")?
            .message
            .as_ref()
            .ok_or("missing choices[0].message")?
            .content
            .as_deref()
            .ok_or("missing choices[0].message.content")
    }
}

// ============================================================================
// Gemini
// ============================================================================

/// generateContent request to the Gemini API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn request holding one text part.
    pub fn single_text(text: impl Into<String>, generation_config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.into()),
                }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// generateContent response from the Gemini API.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text at `candidates[0].content.parts[0].text`.
    pub fn text(&self) -> Result<&str, &'static str> {
        self.candidates
            .first()
            .ok_or("missing candidates[0]")?
            .content
            .as_ref()
            .ok_or("missing candidates[0].content")?
            .parts
            .first()
            .ok_or("missing candidates[0].content.parts[0]")?
            .text
            .as_deref()
            .ok_or("missing candidates[0].content.parts[0].text")
    }
}

// ============================================================================
// Anthropic
// ============================================================================

/// Messages request to the Anthropic API.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

/// Messages response from the Anthropic API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    pub text: Option<String>,
}

impl MessagesResponse {
    /// Text at `content[0].text`.
    pub fn text(&self) -> Result<&str, &'static str> {
        self.content
            .first()
            .ok_or("missing content[0]")?
            .text
            .as_deref()
            .ok_or("missing content[0].text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use serde_json::{json, Value};

    // Round-trip through text so f32 fields compare as they go on the wire.
    fn wire_json<T: Serialize>(value: &T) -> Value {
        serde_json::from_str(&serde_json::to_string(value).unwrap()).unwrap()
    }

    #[test]
    fn test_openai_text_path() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "hi"}}]
        }))
        .unwrap();
        assert_eq!(response.text(), Ok("hi"));

        let empty: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), Err("missing choices[0]"));
    }

    #[test]
    fn test_gemini_text_path() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "hello"}], "role": "model"}}]
        }))
        .unwrap();
        assert_eq!(response.text(), Ok("hello"));

        let no_parts: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": []}}]
        }))
        .unwrap();
        assert_eq!(no_parts.text(), Err("missing candidates[0].content.parts[0]"));
    }

    #[test]
    fn test_anthropic_text_path() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "content": [{"type": "text", "text": "hey"}]
        }))
        .unwrap();
        assert_eq!(response.text(), Ok("hey"));

        let no_text: MessagesResponse = serde_json::from_value(json!({
            "content": [{"type": "tool_use"}]
        }))
        .unwrap();
        assert_eq!(no_text.text(), Err("missing content[0].text"));
    }

    #[test]
    fn test_gemini_request_shape() {
        let request = GenerateContentRequest::single_text(
            "prompt",
            GenerationConfig {
                temperature: 0.5,
                max_output_tokens: 500,
                top_p: 0.5,
                top_k: 40,
            },
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{"parts": [{"text": "prompt"}]}],
                "generationConfig": {
                    "temperature": 0.5,
                    "maxOutputTokens": 500,
                    "topP": 0.5,
                    "topK": 40
                }
            })
        );
    }

    #[test]
    fn test_default_config_openai_body() {
        let config = ProviderConfig::default();
        let request = ChatCompletionRequest {
            model: config.openai_model.clone(),
            messages: vec![ChatMessage::user("p")],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        assert_eq!(
            wire_json(&request),
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "p"}],
                "max_tokens": 500,
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_default_config_gemini_body() {
        let config = ProviderConfig::default();
        let request = GenerateContentRequest::single_text(
            "p",
            GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_tokens,
                top_p: config.gemini_top_p,
                top_k: config.gemini_top_k,
            },
        );

        assert_eq!(
            wire_json(&request)["generationConfig"],
            json!({
                "temperature": 0.7,
                "maxOutputTokens": 500,
                "topP": 0.8,
                "topK": 40
            })
        );
    }

    #[test]
    fn test_default_config_anthropic_body() {
        let config = ProviderConfig::default();
        let request = MessagesRequest {
            model: config.anthropic_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            messages: vec![ChatMessage::user("p")],
        };

        assert_eq!(
            wire_json(&request),
            json!({
                "model": "claude-3-haiku-20240307",
                "max_tokens": 500,
                "temperature": 0.7,
                "messages": [{"role": "user", "content": "p"}]
            })
        );
    }
}
