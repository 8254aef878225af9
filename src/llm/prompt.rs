//! Prompt construction for suggested commit messages.
//!
//! The request always carries exactly two messages: a system persona and a
//! user instruction that embeds the staged diff.

use serde::Serialize;

/// One role-tagged message in a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for an OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }
}

/// Prefix tags the model may open the summary line with.
pub const PREFIX_TAGS: &[&str] = &["New", "Update", "Remove", "Refactor", "Fix", "Misc"];

/// Maximum length requested for the summary line.
pub const SUMMARY_MAX_CHARS: usize = 80;

/// The system persona: a developer writing concise commit messages who also
/// checks variable names against lower camel case.
pub fn system_prompt() -> String {
    "你是一個優秀的開發者，負責撰寫簡潔又描述清楚的 Git commit 訊息, \
     和建議並檢查變數命名是否有swift規範(小駝峰命名法:第1個字為小寫駝峰)。"
        .to_string()
}

/// The user instruction embedding `diff`.
///
/// Asks for three parts: a tagged summary line, a bulleted description and
/// a camel-case naming warning section (`檔案:L行 ==> 變數`).
pub fn user_prompt(diff: &str) -> String {
    let tags = PREFIX_TAGS.join("|");
    format!(
        "根據以下的 git 差異生成一個有意義的 commit 英文動詞開頭加繁體中文訊息和建議，請包含3部分：\n \
         範例: [{tags}]（不超過{SUMMARY_MAX_CHARS}字）\n\n \
         Description:（條列描述變更內容）：\n{diff}\n\n \
         Suggest :\n [⚠️) 駝峰檢查], 檔案:L行 ==> 變數"
    )
}

/// Build the ordered system + user messages for `diff`.
pub fn build_messages(diff: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt()),
        ChatMessage::user(user_prompt(diff)),
    ]
}
