//! Shared test support: a scripted video API for driving the poller.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use promptforge::gemini::types::{GeneratedVideo, Operation, OperationResponse, VideoRef};
use promptforge::{ApiError, VideoApi};

/// Builds a not-yet-done operation with the given handle.
pub fn pending(handle: &str) -> Operation {
    Operation {
        name: handle.to_string(),
        done: false,
        response: None,
    }
}

/// Builds a completed operation whose response carries a result URI.
pub fn done_with_uri(handle: &str, uri: &str) -> Operation {
    Operation {
        name: handle.to_string(),
        done: true,
        response: Some(OperationResponse {
            generated_videos: vec![GeneratedVideo {
                video: Some(VideoRef {
                    uri: Some(uri.to_string()),
                }),
            }],
        }),
    }
}

/// Builds a completed operation without any downloadable result.
pub fn done_without_result(handle: &str) -> Operation {
    Operation {
        name: handle.to_string(),
        done: true,
        response: Some(OperationResponse {
            generated_videos: vec![],
        }),
    }
}

pub fn status_error(status: &str) -> ApiError {
    ApiError::Status {
        status: status.to_string(),
        body: String::new(),
    }
}

/// Video API fake that replays a scripted sequence of responses and counts
/// the calls it receives.
pub struct ScriptedVideoApi {
    submit_response: Mutex<Option<Result<Operation, ApiError>>>,
    query_responses: Mutex<VecDeque<Result<Operation, ApiError>>>,
    download_response: Mutex<Option<Result<Vec<u8>, ApiError>>>,
    pub query_count: AtomicU32,
    pub download_count: AtomicU32,
}

impl ScriptedVideoApi {
    pub fn new(submit: Result<Operation, ApiError>) -> Self {
        Self {
            submit_response: Mutex::new(Some(submit)),
            query_responses: Mutex::new(VecDeque::new()),
            download_response: Mutex::new(None),
            query_count: AtomicU32::new(0),
            download_count: AtomicU32::new(0),
        }
    }

    pub fn with_queries(
        self,
        responses: impl IntoIterator<Item = Result<Operation, ApiError>>,
    ) -> Self {
        self.query_responses.lock().unwrap().extend(responses);
        self
    }

    pub fn with_download(self, response: Result<Vec<u8>, ApiError>) -> Self {
        *self.download_response.lock().unwrap() = Some(response);
        self
    }

    pub fn queries_made(&self) -> u32 {
        self.query_count.load(Ordering::SeqCst)
    }

    pub fn downloads_made(&self) -> u32 {
        self.download_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoApi for ScriptedVideoApi {
    async fn submit(&self, _prompt: &str) -> Result<Operation, ApiError> {
        self.submit_response
            .lock()
            .unwrap()
            .take()
            .expect("submit scripted exactly once")
    }

    async fn query(&self, _handle: &str) -> Result<Operation, ApiError> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        self.query_responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("more status queries than scripted responses")
    }

    async fn download(&self, _uri: &str) -> Result<Vec<u8>, ApiError> {
        self.download_count.fetch_add(1, Ordering::SeqCst);
        self.download_response
            .lock()
            .unwrap()
            .take()
            .expect("download scripted exactly once")
    }
}
