#![deny(missing_docs)]

//! # Documentation Enhancement
//!
//! Sends the merged draft to a generative-text backend for polishing.
//!
//! The stage is fail-open: an unknown backend identifier, a missing credential,
//! a transport failure or an unexpected response all log a diagnostic and hand
//! back the draft unchanged.

pub mod fynd;
pub mod gemini;
mod http;
pub mod openai;

pub use fynd::FyndBackend;
pub use gemini::GeminiBackend;
pub use openai::OpenAiBackend;

use crate::config::BackendSettings;
use derive_more::Display;
use std::str::FromStr;

/// Maximum completion length requested from every backend.
pub const MAX_TOKENS: u32 = 1500;

/// Instructions placed before the draft.
pub const PROMPT_PREAMBLE: &str = "Please review and enhance the following API documentation with a focus on clarity, conciseness, and structure. Ensure the documentation includes the following elements:

1. **Purpose Explanation**: Begin with a brief overview of the module or feature, explaining its purpose and key functionalities. Keep this detailed.

2. **Functionality Summary**: Summarize what the module or feature does based on unit tests, including any important behaviors or edge cases that should be highlighted.

3. **Onboarding Guide**: Provide clear and concise explanations and guidance tailored for developers who are onboarding onto the project. Include any essential information or tips that can help them effectively understand and utilize the API.

4. **Key API Endpoints**: For each API endpoint, provide:
    - The endpoint path and HTTP method.
    - A brief description of its functionality.
    - A list of parameters, specifying the name, type, required status, and description of each parameter.
    - Possible responses with status codes and brief explanations.

5. **Status Codes**: Explain the status codes the API returns.

6. Provide a proper ending note.

Make sure the final output is structured in a coherent and organized manner, to facilitate readability and integration into the existing documentation.";

/// Instructions placed after the draft.
pub const PROMPT_CLOSING: &str =
    "Please provide the entire improved documentation in markdown format, from start to end in a single markdown.";

/// Why a backend could not produce an enhanced document.
#[derive(Debug, Clone, Display, PartialEq, Eq)]
pub enum BackendError {
    /// The API key for the backend is not configured.
    #[display("Missing credential: set {_0}")]
    MissingCredential(String),
    /// The request could not be sent or the server answered with an error status.
    #[display("Transport error: {_0}")]
    Transport(String),
    /// The server answered with a body we cannot read text from.
    #[display("Malformed response: {_0}")]
    MalformedResponse(String),
}

impl std::error::Error for BackendError {}

/// A text-generation service able to rewrite a prompt into an improved document.
pub trait EnhancementBackend {
    /// Human-readable backend name used in logs.
    fn name(&self) -> &str;

    /// Sends `prompt` and returns the generated text, trimmed.
    fn enhance(&self, prompt: &str) -> Result<String, BackendError>;
}

/// Supported backend identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// `openai`
    OpenAi,
    /// `gemini`
    Gemini,
    /// `fynd`
    Fynd,
}

/// An identifier that names no supported backend.
#[derive(Debug, Display, PartialEq, Eq)]
#[display("Unsupported AI service: {_0}")]
pub struct UnsupportedBackend(pub String);

impl std::error::Error for UnsupportedBackend {}

impl FromStr for BackendKind {
    type Err = UnsupportedBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            "fynd" => Ok(Self::Fynd),
            _ => Err(UnsupportedBackend(s.to_string())),
        }
    }
}

impl BackendKind {
    /// Builds the backend implementation for this identifier.
    pub fn build(self, settings: &BackendSettings) -> Box<dyn EnhancementBackend> {
        match self {
            Self::OpenAi => Box::new(OpenAiBackend::from_settings(settings)),
            Self::Gemini => Box::new(GeminiBackend::from_settings(settings)),
            Self::Fynd => Box::new(FyndBackend::from_settings(settings)),
        }
    }
}

/// Resolves an identifier to a backend. Unsupported identifiers are logged and yield `None`.
pub fn select_backend(
    identifier: &str,
    settings: &BackendSettings,
) -> Option<Box<dyn EnhancementBackend>> {
    match identifier.parse::<BackendKind>() {
        Ok(kind) => Some(kind.build(settings)),
        Err(err) => {
            tracing::warn!("{}", err);
            None
        }
    }
}

/// Wraps the draft in the fixed instructions.
pub fn compose_prompt(draft: &str) -> String {
    format!("{}\n\n{}\n\n{}", PROMPT_PREAMBLE, draft, PROMPT_CLOSING)
}

/// Asks `backend` to polish `draft`, returning `draft` unchanged on any failure.
pub fn enhance_with(backend: &dyn EnhancementBackend, draft: &str) -> String {
    tracing::info!("Processing documentation using {}...", backend.name());
    match backend.enhance(&compose_prompt(draft)) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(
                backend = backend.name(),
                "Error occurred while running {}: {}. Returning default documentation.",
                backend.name(),
                err
            );
            draft.to_string()
        }
    }
}

/// Selects the backend by identifier and polishes `draft`, failing open.
pub fn enhance_documentation(draft: &str, identifier: &str, settings: &BackendSettings) -> String {
    match select_backend(identifier, settings) {
        Some(backend) => enhance_with(backend.as_ref(), draft),
        None => draft.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct EchoBackend {
        seen: RefCell<Option<String>>,
    }

    impl EnhancementBackend for EchoBackend {
        fn name(&self) -> &str {
            "Echo"
        }

        fn enhance(&self, prompt: &str) -> Result<String, BackendError> {
            self.seen.borrow_mut().replace(prompt.to_string());
            Ok("# Polished".to_string())
        }
    }

    struct FailingBackend(BackendError);

    impl EnhancementBackend for FailingBackend {
        fn name(&self) -> &str {
            "Failing"
        }

        fn enhance(&self, _prompt: &str) -> Result<String, BackendError> {
            Err(self.0.clone())
        }
    }

    #[test]
    fn test_backend_kind_parse_is_case_insensitive() {
        assert_eq!("OpenAI".parse::<BackendKind>(), Ok(BackendKind::OpenAi));
        assert_eq!("gemini".parse::<BackendKind>(), Ok(BackendKind::Gemini));
        assert_eq!(" Fynd ".parse::<BackendKind>(), Ok(BackendKind::Fynd));
        let err = "unsupported".parse::<BackendKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported AI service: unsupported");
    }

    #[test]
    fn test_unsupported_backend_returns_draft() {
        let draft = "# API (v1)\n\nBody\n\n### Unit Test Summary:";
        let out = enhance_documentation(draft, "unsupported", &BackendSettings::default());
        assert_eq!(out, draft);
    }

    #[test]
    fn test_success_returns_backend_text_and_sends_full_prompt() {
        let backend = EchoBackend {
            seen: RefCell::new(None),
        };
        let out = enhance_with(&backend, "DRAFT BODY");
        assert_eq!(out, "# Polished");

        let prompt = backend.seen.borrow().clone().unwrap();
        assert!(prompt.starts_with(PROMPT_PREAMBLE));
        assert!(prompt.contains("\n\nDRAFT BODY\n\n"));
        assert!(prompt.ends_with(PROMPT_CLOSING));
    }

    #[test]
    fn test_backend_errors_fail_open() {
        let draft = "draft with tests";
        for err in [
            BackendError::MissingCredential("OPENAI_API_KEY".into()),
            BackendError::Transport("connection refused".into()),
            BackendError::MalformedResponse("no choices".into()),
        ] {
            let backend = FailingBackend(err);
            assert_eq!(enhance_with(&backend, draft), draft);
        }
    }

    #[test]
    fn test_missing_credentials_fail_open_for_every_backend() {
        let settings = BackendSettings::default();
        for id in ["openai", "gemini", "fynd"] {
            assert_eq!(enhance_documentation("draft", id, &settings), "draft");
        }
    }

    #[test]
    fn test_unreachable_endpoint_fails_open() {
        let settings = BackendSettings {
            credentials: crate::config::Credentials {
                fynd_api_key: Some("key".into()),
                ..Default::default()
            },
            model: None,
            endpoint: Some("http://127.0.0.1:9/copilot".into()),
        };
        assert_eq!(enhance_documentation("draft", "fynd", &settings), "draft");
    }

    #[test]
    fn test_compose_prompt_layout() {
        let prompt = compose_prompt("X");
        assert_eq!(
            prompt,
            format!("{}\n\nX\n\n{}", PROMPT_PREAMBLE, PROMPT_CLOSING)
        );
    }
}
