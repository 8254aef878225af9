//! Commit message generation via the chat-completion API.

use tracing::{debug, error};

use super::client::CompletionClient;
use super::prompt::build_messages;

/// Printed in place of a suggestion when the API call fails for any reason.
pub const FALLBACK_MESSAGE: &str = "Refactor code.";

/// Generate a suggested commit message for `diff`.
///
/// Never fails: network errors, non-2xx statuses, malformed JSON and empty
/// replies are logged and replaced by [`FALLBACK_MESSAGE`].
pub async fn generate_message<C: CompletionClient + ?Sized>(client: &C, diff: &str) -> String {
    let messages = build_messages(diff);
    debug!(
        "Commit prompt length: {} chars",
        messages.iter().map(|m| m.content.chars().count()).sum::<usize>()
    );

    match client.complete(&messages).await {
        Ok(message) => message,
        Err(e) => {
            error!("Error generating commit message: {}", e);
            FALLBACK_MESSAGE.to_string()
        }
    }
}
