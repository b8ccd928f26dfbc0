//! # Fynd Copilot Backend

use crate::config::{BackendSettings, FYND_API_KEY_VAR};
use crate::enhance::http::post_json;
use crate::enhance::{BackendError, EnhancementBackend, MAX_TOKENS};
use serde::{Deserialize, Serialize};

/// Copilot endpoint.
pub const FYND_ENDPOINT: &str = "https://api.fynd.com/copilot";

/// Enhancement through Fynd Copilot.
#[derive(Debug, Clone)]
pub struct FyndBackend {
    api_key: Option<String>,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct CopilotRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
struct CopilotResponse {
    #[serde(default)]
    data: CopilotData,
}

#[derive(Debug, Default, Deserialize)]
struct CopilotData {
    text: Option<String>,
}

impl FyndBackend {
    /// Builds the backend from shared settings. Fynd has no model selection.
    pub fn from_settings(settings: &BackendSettings) -> Self {
        Self {
            api_key: settings.credentials.fynd_api_key.clone(),
            endpoint: settings
                .endpoint
                .clone()
                .unwrap_or_else(|| FYND_ENDPOINT.to_string()),
        }
    }
}

fn improved_text(response: CopilotResponse) -> Result<String, BackendError> {
    let text = response
        .data
        .text
        .ok_or_else(|| BackendError::MalformedResponse("response contained no data.text".into()))?;
    match text.trim() {
        "" => Err(BackendError::MalformedResponse("data.text was empty".into())),
        trimmed => Ok(trimmed.to_string()),
    }
}

impl EnhancementBackend for FyndBackend {
    fn name(&self) -> &str {
        "Fynd Copilot"
    }

    fn enhance(&self, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| BackendError::MissingCredential(FYND_API_KEY_VAR.into()))?;

        let body = CopilotRequest {
            prompt,
            max_tokens: MAX_TOKENS,
        };
        let headers = [("Authorization", format!("Bearer {}", api_key))];
        let response: CopilotResponse = post_json(&self.endpoint, &headers, &body)?;
        improved_text(response)
    }
}
