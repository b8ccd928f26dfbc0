//! # Gemini Backend
//!
//! Google Generative Language `generateContent` client.

use crate::config::{BackendSettings, GEMINI_API_KEY_VAR};
use crate::enhance::http::post_json;
use crate::enhance::{BackendError, EnhancementBackend};
use serde::{Deserialize, Serialize};

/// Base URL of the model collection.
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Model used when none is configured.
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Enhancement through Gemini models.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiBackend {
    /// Builds the backend from shared settings.
    pub fn from_settings(settings: &BackendSettings) -> Self {
        Self {
            api_key: settings.credentials.gemini_api_key.clone(),
            model: settings
                .model
                .clone()
                .unwrap_or_else(|| GEMINI_DEFAULT_MODEL.to_string()),
            endpoint: settings
                .endpoint
                .clone()
                .unwrap_or_else(|| GEMINI_ENDPOINT.to_string()),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Concatenates the text parts of the first candidate.
fn candidate_text(response: GenerateResponse) -> Result<String, BackendError> {
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| BackendError::MalformedResponse("response contained no candidates".into()))?;

    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        return Err(BackendError::MalformedResponse(
            "candidate contained no text".into(),
        ));
    }
    Ok(text.trim().to_string())
}

impl EnhancementBackend for GeminiBackend {
    fn name(&self) -> &str {
        "Gemini AI"
    }

    fn enhance(&self, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| BackendError::MissingCredential(GEMINI_API_KEY_VAR.into()))?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let headers = [("x-goog-api-key", api_key.clone())];
        let response: GenerateResponse = post_json(&self.url(), &headers, &body)?;
        candidate_text(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_key() {
        let backend = GeminiBackend::from_settings(&BackendSettings::default());
        assert_eq!(
            backend.enhance("prompt"),
            Err(BackendError::MissingCredential("GEMINI_API_KEY".into()))
        );
    }

    #[test]
    fn test_url_uses_model() {
        let backend = GeminiBackend::from_settings(&BackendSettings::default());
        assert_eq!(
            backend.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );

        let custom = GeminiBackend::from_settings(&BackendSettings {
            model: Some("gemini-2.0-flash".into()),
            endpoint: Some("http://localhost:8080/models/".into()),
            ..Default::default()
        });
        assert_eq!(
            custom.url(),
            "http://localhost:8080/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_candidate_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "# Pet"}, {"text": "store\n"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(candidate_text(response).unwrap(), "# Petstore");
    }

    #[test]
    fn test_blocked_prompt_is_malformed() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert!(matches!(
            candidate_text(response),
            Err(BackendError::MalformedResponse(_))
        ));
    }
}
