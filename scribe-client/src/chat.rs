//! Chat completion endpoint

use tracing::debug;

use crate::OpenAiClient;
use crate::error::Result;
use scribe_core::domain::chat::{ChatCompletion, ChatMessage};
use scribe_core::dto::chat::ChatRequest;

impl OpenAiClient {
    /// Create a chat completion
    ///
    /// # Arguments
    /// * `model` - Model name (e.g., "gpt-4-turbo-preview")
    /// * `messages` - Conversation so far, system prompt first
    ///
    /// # Returns
    /// The completion with its candidate choices
    pub async fn create_chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletion> {
        debug!("Creating chat completion with model {}", model);

        let response = self
            .post("/chat/completions")
            .json(&ChatRequest::new(model, messages))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
