//! Wire types for the generative API responses.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// generateContent (enhancement)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate part, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

// ---------------------------------------------------------------------------
// predict (image synthesis)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub bytes_base64_encoded: Option<String>,
    pub mime_type: Option<String>,
}

// ---------------------------------------------------------------------------
// predictLongRunning (video synthesis)
// ---------------------------------------------------------------------------

/// A remote long-running operation as returned by submit and status queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Opaque handle, re-queryable for status.
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub response: Option<OperationResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    #[serde(default)]
    pub generated_videos: Vec<GeneratedVideo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedVideo {
    pub video: Option<VideoRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRef {
    pub uri: Option<String>,
}

/// Explicit state of a remote operation, so the polling loop never mutates
/// an operation value in place.
#[derive(Debug, Clone)]
pub enum OperationState {
    Pending { handle: String },
    Done { response: Option<OperationResponse> },
}

impl Operation {
    pub fn into_state(self) -> OperationState {
        if self.done {
            OperationState::Done {
                response: self.response,
            }
        } else {
            OperationState::Pending { handle: self.name }
        }
    }
}

impl OperationResponse {
    /// The nested downloadable-resource URI, absent when the provider
    /// reported completion without a usable result.
    pub fn result_uri(&self) -> Option<&str> {
        self.generated_videos
            .first()
            .and_then(|v| v.video.as_ref())
            .and_then(|v| v.uri.as_deref())
    }
}
