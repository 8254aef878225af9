//! Error types for commit-suggest modules using thiserror.

use thiserror::Error;

/// Errors from git process execution and repository discovery.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {args} exited with code {code}: {stderr}")]
    NonZeroExit {
        args: String,
        code: i32,
        stderr: String,
    },

    #[error("Not a git repository (or any of the parent directories): {0}")]
    NotARepository(#[source] git2::Error),

    #[error("Repository has no working directory (bare repository)")]
    BareRepository,
}

/// Errors from chat-completion API calls.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to chat-completion API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Chat-completion API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Chat-completion API returned invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Chat-completion API returned no message content")]
    EmptyResponse,
}

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set. Export it or add it to a .env file in the current directory")]
    MissingApiKey(&'static str),

    #[error("Failed to load .env file: {0}")]
    DotEnv(#[source] dotenvy::Error),
}
