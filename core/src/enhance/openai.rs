//! # OpenAI Backend
//!
//! Chat Completions API client.

use crate::config::{BackendSettings, OPENAI_API_KEY_VAR};
use crate::enhance::http::post_json;
use crate::enhance::{BackendError, EnhancementBackend, MAX_TOKENS};
use serde::{Deserialize, Serialize};

/// Chat Completions endpoint.
pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
/// Model used when none is configured.
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const TEMPERATURE: f32 = 0.7;

/// Enhancement through OpenAI chat models.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    n: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl OpenAiBackend {
    /// Builds the backend from shared settings.
    pub fn from_settings(settings: &BackendSettings) -> Self {
        Self {
            api_key: settings.credentials.openai_api_key.clone(),
            model: settings
                .model
                .clone()
                .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string()),
            endpoint: settings
                .endpoint
                .clone()
                .unwrap_or_else(|| OPENAI_ENDPOINT.to_string()),
        }
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            n: 1,
        }
    }
}

fn reply_text(response: ChatResponse) -> Result<String, BackendError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| BackendError::MalformedResponse("response contained no message".into()))
}

impl EnhancementBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "OpenAI"
    }

    fn enhance(&self, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| BackendError::MissingCredential(OPENAI_API_KEY_VAR.into()))?;

        let headers = [("Authorization", format!("Bearer {}", api_key))];
        let response: ChatResponse = post_json(&self.endpoint, &headers, &self.request(prompt))?;
        reply_text(response)
    }
}
