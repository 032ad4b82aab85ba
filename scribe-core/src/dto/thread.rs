//! Thread, message and run request shapes

use serde::{Deserialize, Serialize};

use crate::domain::thread::MessageRole;

/// Request to append a message to a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_ids: Vec<String>,
}

impl CreateMessage {
    /// User message with no file attachments.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            file_ids: Vec::new(),
        }
    }

    /// User message referencing previously uploaded files.
    pub fn user_with_files(content: impl Into<String>, file_ids: Vec<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            file_ids,
        }
    }
}

/// Request to start a run on a thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRun {
    pub assistant_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_ids_are_omitted_from_the_wire() {
        let body = serde_json::to_value(CreateMessage::user("hello")).unwrap();
        assert!(body.get("file_ids").is_none());
        assert_eq!(body["role"], "user");
    }

    #[test]
    fn file_ids_are_serialized_when_present() {
        let message =
            CreateMessage::user_with_files("Summarize this", vec!["file_abc123".to_string()]);
        let body = serde_json::to_value(message).unwrap();
        assert_eq!(body["file_ids"][0], "file_abc123");
    }
}
