//! The collect → generate pipeline shared by the CLI and tests.

use tracing::info;

use crate::git::{GitExecutor, collect_diff};
use crate::llm::{CompletionClient, generate_message};

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing is staged (after filtering); the API was not called.
    NothingToCommit,
    /// The suggested message, or the fallback text if the API call failed.
    Message(String),
}

/// Collect the staged diff and, if there is one, ask the model for a message.
pub async fn run<E, C>(git: &E, client: &C) -> Outcome
where
    E: GitExecutor + ?Sized,
    C: CompletionClient + ?Sized,
{
    let diff = collect_diff(git).await;
    if diff.is_empty() {
        return Outcome::NothingToCommit;
    }

    info!("Generating commit message from {} chars of diff", diff.chars().count());
    Outcome::Message(generate_message(client, &diff).await)
}
