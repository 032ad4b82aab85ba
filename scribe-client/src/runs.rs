//! Run endpoints

use async_trait::async_trait;
use tracing::debug;

use crate::OpenAiClient;
use crate::error::Result;
use crate::poller::RunStates;
use scribe_core::domain::run::Run;
use scribe_core::dto::thread::CreateRun;

impl OpenAiClient {
    /// Start a run of an assistant over a thread
    ///
    /// # Arguments
    /// * `thread_id` - The thread holding the conversation
    /// * `req` - The run creation request naming the assistant
    ///
    /// # Returns
    /// The created run, usually still `queued`
    pub async fn create_run(&self, thread_id: &str, req: CreateRun) -> Result<Run> {
        debug!(
            "Creating run on thread {} with assistant {}",
            thread_id, req.assistant_id
        );

        let response = Self::beta(self.post(&format!("/threads/{}/runs", thread_id)))
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the current state of a run
    pub async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        let response = Self::beta(self.get(&format!("/threads/{}/runs/{}", thread_id, run_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl RunStates for OpenAiClient {
    async fn fetch_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        self.get_run(thread_id, run_id).await
    }
}
