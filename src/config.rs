//! Runtime configuration: API credential, endpoint and model.
//!
//! The credential is read once at startup and passed explicitly into the
//! completion client. Lookups go through a closure so tests never have to
//! touch the process environment.

use std::env;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

/// Environment variable holding the bearer token for the chat-completion API.
pub const API_KEY_ENV_VAR: &str = "OPEN_API_KEY_COMMIT";

/// Environment variable to override the chat-completion endpoint.
pub const ENDPOINT_ENV_VAR: &str = "COMMIT_SUGGEST_ENDPOINT";

/// Environment variable to override the model identifier.
pub const MODEL_ENV_VAR: &str = "COMMIT_SUGGEST_MODEL";

pub const DEFAULT_ENDPOINT: &str = "https://api.chatanywhere.org/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Resolved configuration for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

// Keep the token out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish()
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// A missing or empty API key is always an error. Empty endpoint and
    /// model values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV_VAR))?;

        let endpoint = non_empty(lookup(ENDPOINT_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let model = non_empty(lookup(MODEL_ENV_VAR)).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            endpoint,
            model,
        })
    }

    /// Apply command-line overrides on top of the environment values.
    pub fn with_overrides(mut self, endpoint: Option<String>, model: Option<String>) -> Self {
        if let Some(endpoint) = non_empty(endpoint) {
            self.endpoint = endpoint;
        }
        if let Some(model) = non_empty(model) {
            self.model = model;
        }
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load a `.env` file from `path` into the process environment.
///
/// Returns `Ok(false)` when the file does not exist. Variables already set in
/// the environment take precedence over the file.
pub fn load_dotenv(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {}", path.display());
            Ok(true)
        }
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::DotEnv(e)),
    }
}
