//! Thread and message domain types

use serde::{Deserialize, Serialize};

/// Remote conversation thread
///
/// An ordered, remote-held message history. Messages are appended through
/// the API and read back newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A single message within a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub id: String,
    pub thread_id: String,
    pub role: MessageRole,
    pub content: Vec<MessageContent>,
    #[serde(default)]
    pub file_ids: Vec<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ThreadMessage {
    /// First text block of the message, if any.
    ///
    /// Assistant replies arrive as a content array; the summarize flow only
    /// cares about the leading text part.
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(|part| match part {
            MessageContent::Text { text } => Some(text.value.as_str()),
        })
    }
}

/// Author of a thread message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One block of message content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: TextContent },
}

/// Text payload of a content block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextContent {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_with_text_content() {
        let message: ThreadMessage = serde_json::from_value(serde_json::json!({
            "id": "msg_abc123",
            "thread_id": "thread_abc123",
            "role": "assistant",
            "content": [
                { "type": "text", "text": { "value": "The introduction covers..." } }
            ],
            "created_at": 1699063291
        }))
        .unwrap();

        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.text(), Some("The introduction covers..."));
        assert!(message.file_ids.is_empty());
    }

    #[test]
    fn text_is_none_for_empty_content() {
        let message: ThreadMessage = serde_json::from_value(serde_json::json!({
            "id": "msg_abc123",
            "thread_id": "thread_abc123",
            "role": "user",
            "content": [],
            "file_ids": ["file_abc123"],
            "created_at": 1699063290
        }))
        .unwrap();

        assert_eq!(message.text(), None);
        assert_eq!(message.file_ids, vec!["file_abc123".to_string()]);
    }
}
