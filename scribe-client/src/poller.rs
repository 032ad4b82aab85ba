//! Run poller
//!
//! Polls a remote run's status on a fixed interval until the vendor reports
//! a terminal status or a deadline elapses. The vendor owns the run and all
//! of its transitions; this loop only re-fetches on a timer.
//!
//! The suspension is cooperative (`tokio::time::sleep`), so waiting on a run
//! never ties up a thread or blocks other tasks in the process.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use scribe_core::domain::run::{Run, RunStatus};

/// Source of run state observations
///
/// Implemented by [`OpenAiClient`](crate::OpenAiClient) over HTTP; tests
/// substitute scripted sequences.
#[async_trait]
pub trait RunStates: Send + Sync {
    /// Fetch the current state of a run
    async fn fetch_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;
}

/// How a watched run ended
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The run completed and its thread now holds the assistant's reply
    Completed(Run),
    /// The run reached a terminal status other than `completed`
    ///
    /// This is a reportable outcome, not an error: the vendor finished the
    /// run without producing a result, and there is nothing to retry.
    Ended(RunStatus),
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Fixed-interval run status poller
///
/// # Example
/// ```no_run
/// # use scribe_client::{OpenAiClient, RunPoller};
/// # use std::time::Duration;
/// # async fn example(client: OpenAiClient) -> scribe_client::Result<()> {
/// let poller = RunPoller::new().with_deadline(Duration::from_secs(300));
/// let outcome = poller.wait(&client, "thread_abc", "run_abc").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RunPoller {
    /// Pause between consecutive status fetches
    interval: Duration,
    /// Give up after this much total waiting; `None` polls indefinitely
    deadline: Option<Duration>,
}

impl RunPoller {
    /// Creates a poller with the default 1s interval and no deadline
    pub fn new() -> Self {
        Self {
            interval: Duration::from_secs(1),
            deadline: None,
        }
    }

    /// Sets the pause between status fetches
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Bounds the total time spent waiting for a terminal status
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Waits until the run reaches a terminal status
    ///
    /// Fetches the run state, then:
    /// - `completed` resolves to [`RunOutcome::Completed`] immediately;
    /// - `failed`/`cancelled`/`expired` resolve to [`RunOutcome::Ended`]
    ///   with no further fetches;
    /// - any in-progress status suspends for the interval and re-fetches.
    ///
    /// A transport or API error on any fetch propagates immediately and is
    /// never retried. If a deadline is set and elapses while the run is
    /// still in progress, returns [`ClientError::DeadlineExceeded`].
    pub async fn wait(
        &self,
        api: &impl RunStates,
        thread_id: &str,
        run_id: &str,
    ) -> Result<RunOutcome> {
        let started = Instant::now();

        loop {
            let run = api.fetch_run(thread_id, run_id).await?;
            debug!("Run {} is {}", run_id, run.status);

            if run.status.is_success() {
                return Ok(RunOutcome::Completed(run));
            }
            if run.status.is_terminal() {
                warn!(
                    "Run {} ended with status '{}'. Unable to complete the request.",
                    run_id, run.status
                );
                return Ok(RunOutcome::Ended(run.status));
            }

            if let Some(deadline) = self.deadline {
                if started.elapsed() >= deadline {
                    return Err(ClientError::DeadlineExceeded { waited: deadline });
                }
            }

            time::sleep(self.interval).await;
        }
    }
}

impl Default for RunPoller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a scripted sequence of fetch results and counts fetches.
    struct ScriptedRuns {
        script: Mutex<VecDeque<Result<RunStatus>>>,
        fetches: AtomicUsize,
    }

    impl ScriptedRuns {
        fn new(script: Vec<Result<RunStatus>>) -> Self {
            Self {
                script: Mutex::new(script.into_iter().collect()),
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RunStates for ScriptedRuns {
        async fn fetch_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let next = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .expect("poller fetched past the end of the script");
            next.map(|status| Run {
                id: run_id.to_string(),
                thread_id: thread_id.to_string(),
                assistant_id: "asst_test".to_string(),
                status,
                created_at: chrono::Utc::now(),
            })
        }
    }

    fn fast_poller() -> RunPoller {
        RunPoller::new().with_interval(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn completed_on_first_fetch_stops_immediately() {
        let api = ScriptedRuns::new(vec![Ok(RunStatus::Completed)]);

        let outcome = fast_poller().wait(&api, "thread_1", "run_1").await.unwrap();

        assert!(outcome.is_completed());
        assert_eq!(api.fetch_count(), 1);
    }

    #[tokio::test]
    async fn polls_through_in_progress_statuses() {
        // N=2 non-terminal statuses followed by a terminal one: N+1 fetches.
        let api = ScriptedRuns::new(vec![
            Ok(RunStatus::Queued),
            Ok(RunStatus::InProgress),
            Ok(RunStatus::Completed),
        ]);

        let outcome = fast_poller().wait(&api, "thread_1", "run_1").await.unwrap();

        assert!(outcome.is_completed());
        assert_eq!(api.fetch_count(), 3);
    }

    #[tokio::test]
    async fn non_success_terminal_status_stops_polling() {
        for status in [RunStatus::Failed, RunStatus::Cancelled, RunStatus::Expired] {
            let api = ScriptedRuns::new(vec![Ok(RunStatus::InProgress), Ok(status)]);

            let outcome = fast_poller().wait(&api, "thread_1", "run_1").await.unwrap();

            match outcome {
                RunOutcome::Ended(ended) => assert_eq!(ended, status),
                RunOutcome::Completed(_) => panic!("{status} must not count as completed"),
            }
            // No fetch after the terminal observation.
            assert_eq!(api.fetch_count(), 2);
        }
    }

    #[tokio::test]
    async fn transport_error_propagates_and_halts() {
        let api = ScriptedRuns::new(vec![
            Ok(RunStatus::Queued),
            Err(ClientError::api_error(500, "connection reset")),
        ]);

        let result = fast_poller().wait(&api, "thread_1", "run_1").await;

        assert!(matches!(
            result,
            Err(ClientError::ApiError { status: 500, .. })
        ));
        assert_eq!(api.fetch_count(), 2);
    }

    #[tokio::test]
    async fn deadline_bounds_the_loop() {
        // Script never reaches a terminal status; the deadline must stop it.
        // The deadline is shorter than one interval, so the second fetch is
        // guaranteed to observe an elapsed deadline.
        let api = ScriptedRuns::new(vec![
            Ok(RunStatus::InProgress),
            Ok(RunStatus::InProgress),
            Ok(RunStatus::InProgress),
        ]);

        let poller = RunPoller::new()
            .with_interval(Duration::from_millis(10))
            .with_deadline(Duration::from_millis(5));
        let result = poller.wait(&api, "thread_1", "run_1").await;

        assert!(matches!(result, Err(ClientError::DeadlineExceeded { .. })));
        assert_eq!(api.fetch_count(), 2);
    }
}
