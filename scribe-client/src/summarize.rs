//! Document summarization workflow
//!
//! Drives the full thread lifecycle against the vendor API: create a thread,
//! post the user's request with the uploaded file attached, start a run,
//! wait for it through [`RunPoller`], read back the assistant's reply, and
//! delete the thread.
//!
//! The workflow is written against the [`AssistantThreads`] seam so its
//! call sequence can be verified without a live API.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::OpenAiClient;
use crate::error::{ClientError, Result};
use crate::poller::{RunOutcome, RunPoller, RunStates};
use scribe_core::domain::run::{Run, RunStatus};
use scribe_core::domain::thread::{Thread, ThreadMessage};
use scribe_core::dto::Deleted;
use scribe_core::dto::thread::{CreateMessage, CreateRun};

/// Thread-scope operations the workflow needs
///
/// [`RunStates`] is a supertrait so a single implementation serves both the
/// workflow steps and the polling loop inside them.
#[async_trait]
pub trait AssistantThreads: RunStates {
    async fn create_thread(&self) -> Result<Thread>;
    async fn create_message(&self, thread_id: &str, req: CreateMessage) -> Result<ThreadMessage>;
    async fn create_run(&self, thread_id: &str, req: CreateRun) -> Result<Run>;
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>>;
    async fn delete_thread(&self, thread_id: &str) -> Result<Deleted>;
}

#[async_trait]
impl AssistantThreads for OpenAiClient {
    async fn create_thread(&self) -> Result<Thread> {
        OpenAiClient::create_thread(self).await
    }

    async fn create_message(&self, thread_id: &str, req: CreateMessage) -> Result<ThreadMessage> {
        OpenAiClient::create_message(self, thread_id, req).await
    }

    async fn create_run(&self, thread_id: &str, req: CreateRun) -> Result<Run> {
        OpenAiClient::create_run(self, thread_id, req).await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        OpenAiClient::list_messages(self, thread_id).await
    }

    async fn delete_thread(&self, thread_id: &str) -> Result<Deleted> {
        OpenAiClient::delete_thread(self, thread_id).await
    }
}

/// How a summarize/exchange operation ended
#[derive(Debug, Clone)]
pub enum SummarizeOutcome {
    /// The run completed; this is the assistant's newest reply
    Summary(String),
    /// The run ended without producing a reply
    ///
    /// Carries the terminal status the vendor reported. No messages are
    /// fetched in this case.
    RunEnded(RunStatus),
}

/// Runs assistant exchanges over vendor threads
pub struct Summarizer {
    poller: RunPoller,
}

impl Summarizer {
    /// Creates a summarizer that waits for runs with the given poller
    pub fn new(poller: RunPoller) -> Self {
        Self { poller }
    }

    /// Summarize an uploaded document in a fresh, throwaway thread
    ///
    /// Creates a thread, posts `prompt` with the file attached, runs the
    /// assistant, and deletes the thread again whether or not the run
    /// completed. Errors from any step propagate without cleanup, matching
    /// the fail-fast behavior of the rest of the client.
    ///
    /// # Arguments
    /// * `api` - Thread operations, normally the [`OpenAiClient`]
    /// * `assistant_id` - The assistant holding the attached file
    /// * `file_id` - Id of the uploaded document
    /// * `prompt` - What to ask about the document
    pub async fn summarize(
        &self,
        api: &impl AssistantThreads,
        assistant_id: &str,
        file_id: &str,
        prompt: &str,
    ) -> Result<SummarizeOutcome> {
        let thread = api.create_thread().await?;
        info!("Created thread {}", thread.id);

        let message = CreateMessage::user_with_files(prompt, vec![file_id.to_string()]);
        let outcome = self
            .run_exchange(api, &thread.id, assistant_id, message)
            .await?;

        api.delete_thread(&thread.id).await?;
        debug!("Deleted thread {}", thread.id);

        Ok(outcome)
    }

    /// Post a message to an existing thread and wait for the reply
    ///
    /// The thread is left in place, so callers can keep a conversation
    /// going across exchanges.
    pub async fn run_exchange(
        &self,
        api: &impl AssistantThreads,
        thread_id: &str,
        assistant_id: &str,
        message: CreateMessage,
    ) -> Result<SummarizeOutcome> {
        api.create_message(thread_id, message).await?;
        debug!("Message posted to thread {}", thread_id);

        let run = api
            .create_run(
                thread_id,
                CreateRun {
                    assistant_id: assistant_id.to_string(),
                },
            )
            .await?;
        debug!("Run {} created", run.id);

        match self.poller.wait(api, thread_id, &run.id).await? {
            RunOutcome::Completed(_) => {
                let messages = api.list_messages(thread_id).await?;
                // Newest first; the head is the assistant's reply.
                let reply = messages
                    .first()
                    .and_then(|m| m.text())
                    .ok_or_else(|| {
                        ClientError::ParseError("Assistant reply contained no text".to_string())
                    })?
                    .to_string();
                Ok(SummarizeOutcome::Summary(reply))
            }
            RunOutcome::Ended(status) => {
                warn!(
                    "Run on thread {} ended with status '{}'; no reply fetched",
                    thread_id, status
                );
                Ok(SummarizeOutcome::RunEnded(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use scribe_core::domain::thread::{MessageContent, MessageRole, TextContent};

    /// Scripted thread API that records how it was called.
    struct ScriptedThreads {
        statuses: Mutex<VecDeque<RunStatus>>,
        reply: String,
        fetches: AtomicUsize,
        lists: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl ScriptedThreads {
        fn new(statuses: Vec<RunStatus>, reply: &str) -> Self {
            Self {
                statuses: Mutex::new(statuses.into_iter().collect()),
                reply: reply.to_string(),
                fetches: AtomicUsize::new(0),
                lists: AtomicUsize::new(0),
                deletes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RunStates for ScriptedThreads {
        async fn fetch_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let status = self
                .statuses
                .lock()
                .unwrap()
                .pop_front()
                .expect("fetched past the scripted statuses");
            Ok(Run {
                id: run_id.to_string(),
                thread_id: thread_id.to_string(),
                assistant_id: "asst_test".to_string(),
                status,
                created_at: chrono::Utc::now(),
            })
        }
    }

    #[async_trait]
    impl AssistantThreads for ScriptedThreads {
        async fn create_thread(&self) -> Result<Thread> {
            Ok(Thread {
                id: "thread_test".to_string(),
                created_at: chrono::Utc::now(),
            })
        }

        async fn create_message(
            &self,
            thread_id: &str,
            req: CreateMessage,
        ) -> Result<ThreadMessage> {
            Ok(ThreadMessage {
                id: "msg_user".to_string(),
                thread_id: thread_id.to_string(),
                role: req.role,
                content: vec![MessageContent::Text {
                    text: TextContent { value: req.content },
                }],
                file_ids: req.file_ids,
                created_at: chrono::Utc::now(),
            })
        }

        async fn create_run(&self, thread_id: &str, req: CreateRun) -> Result<Run> {
            Ok(Run {
                id: "run_test".to_string(),
                thread_id: thread_id.to_string(),
                assistant_id: req.assistant_id,
                status: RunStatus::Queued,
                created_at: chrono::Utc::now(),
            })
        }

        async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            Ok(vec![ThreadMessage {
                id: "msg_reply".to_string(),
                thread_id: thread_id.to_string(),
                role: MessageRole::Assistant,
                content: vec![MessageContent::Text {
                    text: TextContent {
                        value: self.reply.clone(),
                    },
                }],
                file_ids: vec![],
                created_at: chrono::Utc::now(),
            }])
        }

        async fn delete_thread(&self, thread_id: &str) -> Result<Deleted> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            Ok(Deleted {
                id: thread_id.to_string(),
                deleted: true,
            })
        }
    }

    fn summarizer() -> Summarizer {
        Summarizer::new(RunPoller::new().with_interval(Duration::from_millis(1)))
    }

    #[tokio::test]
    async fn completed_run_fetches_messages_once_and_deletes_thread() {
        let api = ScriptedThreads::new(
            vec![RunStatus::Queued, RunStatus::InProgress, RunStatus::Completed],
            "Summary of the introduction.",
        );

        let outcome = summarizer()
            .summarize(&api, "asst_test", "file_test", "Summarize the introduction")
            .await
            .unwrap();

        match outcome {
            SummarizeOutcome::Summary(text) => {
                assert_eq!(text, "Summary of the introduction.");
            }
            SummarizeOutcome::RunEnded(status) => panic!("unexpected outcome: {status}"),
        }
        assert_eq!(api.fetches.load(Ordering::SeqCst), 3);
        assert_eq!(api.lists.load(Ordering::SeqCst), 1);
        assert_eq!(api.deletes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_run_fetches_no_messages() {
        let api = ScriptedThreads::new(vec![RunStatus::InProgress, RunStatus::Failed], "unused");

        let outcome = summarizer()
            .summarize(&api, "asst_test", "file_test", "Summarize the introduction")
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            SummarizeOutcome::RunEnded(RunStatus::Failed)
        ));
        assert_eq!(api.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(api.lists.load(Ordering::SeqCst), 0);
        // Cleanup still happens on the non-success path.
        assert_eq!(api.deletes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exchange_leaves_the_thread_alone() {
        let api = ScriptedThreads::new(vec![RunStatus::Completed], "Reply text.");

        let outcome = summarizer()
            .run_exchange(
                &api,
                "thread_test",
                "asst_test",
                CreateMessage::user("hello"),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, SummarizeOutcome::Summary(_)));
        assert_eq!(api.deletes.load(Ordering::SeqCst), 0);
    }
}
