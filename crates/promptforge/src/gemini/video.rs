//! Video synthesis endpoints: submit, status query and result download.
//!
//! The [`VideoApi`] trait is the seam between the polling loop and the real
//! API, so the loop can be driven by a scripted fake in tests.

use async_trait::async_trait;
use serde_json::json;

use super::types::Operation;
use super::{check_status, ApiError, GeminiClient};

/// Remote calls a video generation job needs: one submission, any number of
/// status queries, one download.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Submits the prompt and returns the initial operation.
    async fn submit(&self, prompt: &str) -> Result<Operation, ApiError>;

    /// Re-queries an operation by its handle, returning a refreshed one.
    async fn query(&self, handle: &str) -> Result<Operation, ApiError>;

    /// Fetches the binary result from its downloadable-resource URI.
    async fn download(&self, uri: &str) -> Result<Vec<u8>, ApiError>;
}

#[async_trait]
impl VideoApi for GeminiClient {
    async fn submit(&self, prompt: &str) -> Result<Operation, ApiError> {
        let body = json!({
            "instances": [{"prompt": prompt}],
            "parameters": {"sampleCount": 1}
        });

        let url = self.model_url(&self.config().video_model, "predictLongRunning");
        let response = self.post_json(&url, &body).await?;
        Ok(response.json().await?)
    }

    async fn query(&self, handle: &str) -> Result<Operation, ApiError> {
        let url = self.resource_url(handle);
        let response = self.get_json(&url).await?;
        Ok(response.json().await?)
    }

    async fn download(&self, uri: &str) -> Result<Vec<u8>, ApiError> {
        // The result URI requires the access credential as a query parameter.
        let response = self
            .http()
            .get(uri)
            .query(&[("key", self.api_key())])
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
