//! Assistant management endpoints

use tracing::debug;

use crate::OpenAiClient;
use crate::error::Result;
use scribe_core::domain::assistant::Assistant;
use scribe_core::dto::assistant::CreateAssistant;
use scribe_core::dto::{Deleted, ListResponse};

impl OpenAiClient {
    /// Create a new assistant
    ///
    /// # Arguments
    /// * `req` - The assistant creation request
    ///
    /// # Returns
    /// The created assistant record
    pub async fn create_assistant(&self, req: CreateAssistant) -> Result<Assistant> {
        debug!("Creating assistant with model {}", req.model);

        let response = Self::beta(self.post("/assistants")).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List all assistants owned by this API key
    pub async fn list_assistants(&self) -> Result<Vec<Assistant>> {
        let response = Self::beta(self.get("/assistants")).send().await?;

        let list: ListResponse<Assistant> = self.handle_response(response).await?;
        Ok(list.data)
    }

    /// Delete an assistant
    ///
    /// # Arguments
    /// * `assistant_id` - The assistant to delete
    pub async fn delete_assistant(&self, assistant_id: &str) -> Result<Deleted> {
        debug!("Deleting assistant {}", assistant_id);

        let response = Self::beta(self.delete(&format!("/assistants/{}", assistant_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
