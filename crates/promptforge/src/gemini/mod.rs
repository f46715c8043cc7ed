//! Client for the Google Generative Language API: prompt enhancement,
//! image synthesis and the long-running video operation endpoints.

pub mod enhance;
pub mod image;
pub mod types;
pub mod video;

use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::ClientConfig;

pub use video::VideoApi;

/// A failed remote call: transport-level, or an unsuccessful HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: String, body: String },
}

/// HTTP client for the generative API endpoints.
pub struct GeminiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL for a model verb, e.g. `models/gemini-2.5-flash:generateContent`.
    pub(crate) fn model_url(&self, model: &str, verb: &str) -> String {
        format!("{}/models/{}:{}", self.config.api_base, model, verb)
    }

    /// URL for a resource name returned by the API, e.g. an operation name.
    pub(crate) fn resource_url(&self, name: &str) -> String {
        format!("{}/{}", self.config.api_base, name)
    }

    /// POSTs a JSON body with the API key header and checks the HTTP status.
    pub(crate) async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .json(body)
            .send()
            .await?;

        check_status(response).await
    }

    /// GETs a URL with the API key header and checks the HTTP status.
    pub(crate) async fn get_json(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http
            .get(url)
            .header("x-goog-api-key", self.config.api_key.expose_secret())
            .send()
            .await?;

        check_status(response).await
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        self.config.api_key.expose_secret()
    }
}

pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}
