//! Chat completion domain types

use serde::{Deserialize, Serialize};

/// A single chat message, sent or received
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// One candidate answer inside a completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatMessage,
}

/// Chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub model: String,
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletion {
    /// Content of the first choice, which is all the CLI ever prints.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_content_picks_first_choice() {
        let completion: ChatCompletion = serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-abc123",
            "model": "gpt-4-turbo-preview",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "first" } },
                { "index": 1, "message": { "role": "assistant", "content": "second" } }
            ]
        }))
        .unwrap();

        assert_eq!(completion.first_content(), Some("first"));
    }

    #[test]
    fn first_content_is_none_without_choices() {
        let completion = ChatCompletion {
            id: "chatcmpl-abc123".to_string(),
            model: "gpt-4-turbo-preview".to_string(),
            choices: vec![],
        };
        assert_eq!(completion.first_content(), None);
    }
}
