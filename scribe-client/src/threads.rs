//! Thread and message endpoints

use tracing::debug;

use crate::OpenAiClient;
use crate::error::Result;
use scribe_core::domain::thread::{Thread, ThreadMessage};
use scribe_core::dto::thread::CreateMessage;
use scribe_core::dto::{Deleted, ListResponse};

impl OpenAiClient {
    /// Create a new, empty conversation thread
    pub async fn create_thread(&self) -> Result<Thread> {
        debug!("Creating thread");

        let response = Self::beta(self.post("/threads"))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Retrieve a thread by id
    pub async fn get_thread(&self, thread_id: &str) -> Result<Thread> {
        let response = Self::beta(self.get(&format!("/threads/{}", thread_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a thread and its messages
    pub async fn delete_thread(&self, thread_id: &str) -> Result<Deleted> {
        debug!("Deleting thread {}", thread_id);

        let response = Self::beta(self.delete(&format!("/threads/{}", thread_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Append a message to a thread
    ///
    /// # Arguments
    /// * `thread_id` - The thread to append to
    /// * `req` - Role, content, and optional file attachments
    pub async fn create_message(
        &self,
        thread_id: &str,
        req: CreateMessage,
    ) -> Result<ThreadMessage> {
        debug!("Posting message to thread {}", thread_id);

        let response = Self::beta(self.post(&format!("/threads/{}/messages", thread_id)))
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// List the messages of a thread, newest first
    pub async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        let response = Self::beta(self.get(&format!("/threads/{}/messages", thread_id)))
            .send()
            .await?;

        let list: ListResponse<ThreadMessage> = self.handle_response(response).await?;
        Ok(list.data)
    }
}
