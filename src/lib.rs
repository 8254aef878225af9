//! commit-suggest - A CLI tool that suggests commit messages for staged changes.
//!
//! # Overview
//!
//! commit-suggest lists the files staged in the current git repository, collects
//! a truncated diff of them, sends it to an OpenAI-compatible chat-completion API
//! and prints the suggested commit message.

pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod pipeline;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, ConfigError, GitError};
pub use git::{GitExecutor, SystemGitExecutor, collect_diff};
pub use llm::{CompletionClient, FALLBACK_MESSAGE, HttpCompletionClient, generate_message};
pub use pipeline::{Outcome, run};
