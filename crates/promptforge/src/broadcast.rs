//! Generation progress broadcasting for real-time UI updates.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Phase of a generation job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    Starting,
    Submitted,
    Polling,
    Downloading,
    Completed,
    Failed,
}

/// Progress event for one generation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationEvent {
    /// Identifier of the local generation attempt (not the remote handle).
    pub job_id: String,
    pub phase: GenerationPhase,
    /// Human-readable message describing current activity.
    pub message: String,
    /// Poll attempt count, set during the polling phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt: Option<u32>,
    pub timestamp: DateTime<Utc>,
    /// Local path of the downloaded result (set on completion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_path: Option<String>,
    /// Error message (set on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationEvent {
    /// Creates an in-flight progress event.
    pub fn progress(job_id: &str, phase: GenerationPhase, message: &str) -> Self {
        Self {
            job_id: job_id.to_string(),
            phase,
            message: message.to_string(),
            attempt: None,
            timestamp: Utc::now(),
            result_path: None,
            error: None,
        }
    }

    /// Creates a polling progress event carrying the attempt counter.
    pub fn polling(job_id: &str, attempt: u32, message: &str) -> Self {
        Self {
            attempt: Some(attempt),
            ..Self::progress(job_id, GenerationPhase::Polling, message)
        }
    }

    /// Creates a completion event.
    pub fn completed(job_id: &str, result_path: &str) -> Self {
        Self {
            result_path: Some(result_path.to_string()),
            ..Self::progress(job_id, GenerationPhase::Completed, "Generation completed")
        }
    }

    /// Creates a failure event.
    pub fn failed(job_id: &str, error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::progress(job_id, GenerationPhase::Failed, "Generation failed")
        }
    }
}

/// Broadcasts generation progress events to any number of subscribers.
#[derive(Clone)]
pub struct GenerationBroadcaster {
    sender: Arc<broadcast::Sender<GenerationEvent>>,
}

impl GenerationBroadcaster {
    /// Creates a broadcaster with the specified channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Sends an event to all subscribers. No active receivers is fine.
    pub fn send(&self, event: GenerationEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GenerationEvent> {
        self.sender.subscribe()
    }
}

impl Default for GenerationBroadcaster {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_sent_events() {
        let broadcaster = GenerationBroadcaster::default();
        let mut rx = broadcaster.subscribe();

        broadcaster.send(GenerationEvent::progress(
            "job-1",
            GenerationPhase::Starting,
            "Starting video generation",
        ));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.job_id, "job-1");
        assert_eq!(event.phase, GenerationPhase::Starting);
    }

    #[test]
    fn send_without_subscribers_does_not_panic() {
        let broadcaster = GenerationBroadcaster::default();
        broadcaster.send(GenerationEvent::failed("job-1", "boom"));
    }

    #[test]
    fn polling_event_carries_attempt() {
        let event = GenerationEvent::polling("job-1", 3, "Rendering");
        assert_eq!(event.attempt, Some(3));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["phase"], "polling");
        assert_eq!(json["jobId"], "job-1");
    }
}
