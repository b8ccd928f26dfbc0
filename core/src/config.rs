#![deny(missing_docs)]

//! # Configuration
//!
//! Paths, backend selection and credentials for a documentation run.
//!
//! Credentials are read from the process environment; the CLI loads a `.env`
//! file into the environment before calling [`Credentials::from_env`].

use std::path::PathBuf;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable holding the Fynd Copilot API key.
pub const FYND_API_KEY_VAR: &str = "FYND_API_KEY";

/// Default specification document.
pub const DEFAULT_SPEC_PATH: &str = "swagger.json";
/// Default Python test suite.
pub const DEFAULT_TESTS_PATH: &str = "test_api.py";
/// Default checkpoint written right after assembly.
pub const DEFAULT_INTERMEDIATE_PATH: &str = "intermediate.md";
/// Default final document.
pub const DEFAULT_OUTPUT_PATH: &str = "documentation.md";
/// Default enhancement backend identifier.
pub const DEFAULT_BACKEND: &str = "gemini";

/// API keys for the enhancement backends. Empty values count as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Key for the OpenAI backend.
    pub openai_api_key: Option<String>,
    /// Key for the Gemini backend.
    pub gemini_api_key: Option<String>,
    /// Key for the Fynd Copilot backend.
    pub fynd_api_key: Option<String>,
}

impl Credentials {
    /// Reads all keys from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads all keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            openai_api_key: read(OPENAI_API_KEY_VAR),
            gemini_api_key: read(GEMINI_API_KEY_VAR),
            fynd_api_key: read(FYND_API_KEY_VAR),
        }
    }
}

// Keys never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("openai_api_key", &mask(&self.openai_api_key))
            .field("gemini_api_key", &mask(&self.gemini_api_key))
            .field("fynd_api_key", &mask(&self.fynd_api_key))
            .finish()
    }
}

/// Settings shared by every enhancement backend.
#[derive(Debug, Clone, Default)]
pub struct BackendSettings {
    /// API keys.
    pub credentials: Credentials,
    /// Model override; each backend has its own default.
    pub model: Option<String>,
    /// Endpoint override (self-hosted gateways, tests).
    pub endpoint: Option<String>,
}

/// Everything a documentation run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Swagger / OpenAPI document (JSON or YAML).
    pub spec_path: PathBuf,
    /// Python test suite inspected for behavior notes.
    pub tests_path: PathBuf,
    /// Checkpoint written right after assembly.
    pub intermediate_path: PathBuf,
    /// Final document.
    pub output_path: PathBuf,
    /// Enhancement backend identifier (`openai`, `gemini`, `fynd`).
    pub backend: String,
    /// Backend credentials and overrides.
    pub backend_settings: BackendSettings,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            spec_path: PathBuf::from(DEFAULT_SPEC_PATH),
            tests_path: PathBuf::from(DEFAULT_TESTS_PATH),
            intermediate_path: PathBuf::from(DEFAULT_INTERMEDIATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            backend: DEFAULT_BACKEND.to_string(),
            backend_settings: BackendSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_credentials_from_lookup_ignores_blank_values() {
        let env: HashMap<&str, &str> = [
            ("OPENAI_API_KEY", "sk-test"),
            ("GEMINI_API_KEY", "   "),
        ]
        .into_iter()
        .collect();
        let creds = Credentials::from_lookup(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(creds.openai_api_key.as_deref(), Some("sk-test"));
        assert!(creds.gemini_api_key.is_none());
        assert!(creds.fynd_api_key.is_none());
    }

    #[test]
    fn test_credentials_debug_masks_keys() {
        let creds = Credentials {
            openai_api_key: Some("sk-secret".into()),
            ..Default::default()
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("***"));
    }

    #[test]
    fn test_pipeline_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.spec_path, PathBuf::from("swagger.json"));
        assert_eq!(config.tests_path, PathBuf::from("test_api.py"));
        assert_eq!(config.intermediate_path, PathBuf::from("intermediate.md"));
        assert_eq!(config.output_path, PathBuf::from("documentation.md"));
        assert_eq!(config.backend, "gemini");
    }
}
