//! Image synthesis: a single request/response round trip, no polling.

use base64::Engine;
use serde_json::json;

use crate::error::GenerationError;

use super::types::PredictResponse;
use super::GeminiClient;

const OUTPUT_MIME_TYPE: &str = "image/jpeg";
const ASPECT_RATIO: &str = "16:9";

impl GeminiClient {
    /// Generates one image for the prompt and returns it as a data URL
    /// usable directly as an image source.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = json!({
            "instances": [{"prompt": prompt}],
            "parameters": {
                "sampleCount": 1,
                "outputMimeType": OUTPUT_MIME_TYPE,
                "aspectRatio": ASPECT_RATIO
            }
        });

        let url = self.model_url(&self.config().image_model, "predict");
        let response = self
            .post_json(&url, &body)
            .await
            .map_err(GenerationError::Submission)?;
        let payload: PredictResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Submission(e.into()))?;

        let bytes = payload
            .predictions
            .first()
            .and_then(|p| p.bytes_base64_encoded.as_deref())
            .ok_or(GenerationError::MissingResult)?;
        let mime = payload
            .predictions
            .first()
            .and_then(|p| p.mime_type.as_deref())
            .unwrap_or(OUTPUT_MIME_TYPE);

        Ok(to_data_url(mime, bytes))
    }
}

// The API returns the image bytes already base64-encoded.
fn to_data_url(mime: &str, base64_bytes: &str) -> String {
    format!("data:{};base64,{}", mime, base64_bytes)
}

/// Decodes the inline payload of a data URL, mostly for tests and callers
/// that want the raw bytes rather than a media source string.
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let payload = url.split_once(";base64,")?.1;
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_round_trips_payload() {
        let url = to_data_url("image/jpeg", "aGVsbG8=");
        assert_eq!(url, "data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(decode_data_url(&url).unwrap(), b"hello");
    }

    #[test]
    fn empty_predictions_mean_missing_result() {
        let payload: PredictResponse = serde_json::from_str(r#"{"predictions": []}"#).unwrap();
        assert!(payload.predictions.first().is_none());
    }
}
