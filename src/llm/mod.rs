//! Chat-completion request construction, HTTP client and message generation.

pub mod client;
pub mod message;
pub mod prompt;

pub use client::{ChatResponse, CompletionClient, HttpCompletionClient, parse_response};
pub use message::{FALLBACK_MESSAGE, generate_message};
pub use prompt::{ChatMessage, ChatRequest, build_messages, system_prompt, user_prompt};
