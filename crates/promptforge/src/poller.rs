//! The video generation orchestrator: submit a job, poll the remote
//! operation at a fixed interval until it completes, then download the
//! resulting asset.
//!
//! There is deliberately no retry, no attempt cap and no cancellation: a
//! failed status query terminates the job, and an operation that never
//! completes is polled until the caller's runtime goes away.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::broadcast::{GenerationBroadcaster, GenerationEvent, GenerationPhase};
use crate::error::GenerationError;
use crate::gemini::types::OperationState;
use crate::gemini::{ApiError, VideoApi};

/// Fixed delay between consecutive status queries.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

const STARTING_MESSAGE: &str = "Starting video generation...";
const SUBMITTED_MESSAGE: &str = "Your video is being created. This can take a few minutes.";
const DOWNLOADING_MESSAGE: &str = "Downloading the generated video...";

const POLL_MESSAGES: [&str; 5] = [
    "Analyzing the prompt and sketching scenes...",
    "Rendering high-fidelity frames...",
    "Compositing video and audio tracks...",
    "Applying final visual effects...",
    "Almost there, polishing the final cut...",
];

/// Progress message for a poll attempt. Attempts are 1-based; the index is
/// clamped, so attempt 5 and everything after it repeat the last message.
/// Total over all inputs (attempt 0 maps to the first message).
pub fn progress_message(attempt: u32) -> &'static str {
    let index = attempt.saturating_sub(1).min(POLL_MESSAGES.len() as u32 - 1);
    POLL_MESSAGES[index as usize]
}

/// Drives one video generation job from submission to downloaded bytes.
pub struct VideoJobRunner {
    api: Arc<dyn VideoApi>,
    broadcaster: GenerationBroadcaster,
    poll_interval: Duration,
}

impl VideoJobRunner {
    pub fn new(api: Arc<dyn VideoApi>, broadcaster: GenerationBroadcaster) -> Self {
        Self {
            api,
            broadcaster,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Overrides the poll interval. Tests pair this with a paused clock.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Runs the job to completion and returns the downloaded video bytes.
    ///
    /// `job_id` identifies this local attempt in progress events. The caller
    /// enforces single-flight per generation slot; nothing here serializes
    /// concurrent runs.
    pub async fn run(&self, job_id: &str, prompt: &str) -> Result<Vec<u8>, GenerationError> {
        self.emit(GenerationEvent::progress(
            job_id,
            GenerationPhase::Starting,
            STARTING_MESSAGE,
        ));

        let operation = self
            .api
            .submit(prompt)
            .await
            .map_err(GenerationError::Submission)?;
        info!(handle = %operation.name, "video job submitted");

        self.emit(GenerationEvent::progress(
            job_id,
            GenerationPhase::Submitted,
            SUBMITTED_MESSAGE,
        ));

        let mut state = operation.into_state();
        let mut attempt: u32 = 0;

        // Fast path: a submit response already marked done skips the loop
        // without a single status query.
        let response = loop {
            let handle = match state {
                OperationState::Done { response } => break response,
                OperationState::Pending { handle } => handle,
            };

            attempt += 1;
            self.emit(GenerationEvent::polling(
                job_id,
                attempt,
                progress_message(attempt),
            ));
            debug!(attempt, "waiting before next status query");

            tokio::time::sleep(self.poll_interval).await;

            state = self
                .api
                .query(&handle)
                .await
                .map_err(GenerationError::PollQuery)?
                .into_state();
        };

        let uri = response
            .as_ref()
            .and_then(|r| r.result_uri())
            .ok_or(GenerationError::MissingResult)?
            .to_string();

        self.emit(GenerationEvent::progress(
            job_id,
            GenerationPhase::Downloading,
            DOWNLOADING_MESSAGE,
        ));

        let bytes = self.api.download(&uri).await.map_err(|e| match e {
            ApiError::Status { status, .. } => GenerationError::Download { status },
            ApiError::Transport(e) => GenerationError::Download {
                status: e.to_string(),
            },
        })?;

        info!(attempts = attempt, bytes = bytes.len(), "video job finished");
        Ok(bytes)
    }

    fn emit(&self, event: GenerationEvent) {
        debug!(phase = ?event.phase, message = %event.message, "generation progress");
        self.broadcaster.send(event);
    }
}
