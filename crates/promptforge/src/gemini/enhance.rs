//! Prompt enhancement: one structured-completion round trip that turns a
//! composed prompt into a richer, fully populated field set.

use serde_json::json;

use crate::error::EnhanceError;
use crate::prompt::{GeneratorType, PromptState};

use super::types::GenerateContentResponse;
use super::{ApiError, GeminiClient};

const SYSTEM_INSTRUCTION: &str = "You are a world-class cinematographer and prompt engineer for \
generative AI. Transform a simple user idea into a professional, exceptionally detailed and \
evocative prompt. Analyze the idea and fill the JSON fields with as much creative nuance as \
possible: emotion, atmosphere, texture and narrative. Use descriptive phrases, not bare \
keywords. If the type is 'video', make sure to fill the 'motion' field; if it is 'image', \
'motion' may be left empty. Return only a structured JSON object conforming to the provided \
schema.";

/// Response schema sent with the request so the model answers in the
/// `PromptState` shape.
fn prompt_schema() -> serde_json::Value {
    let field = |description: &str| json!({"type": "STRING", "description": description});

    json!({
        "type": "OBJECT",
        "properties": {
            "subject": field("The main subject, character or object. Very descriptive and specific."),
            "action": field("The action the subject performs, or the scene taking place."),
            "style": field("The visual or artistic style, e.g. cinematic, photorealistic, oil painting."),
            "composition": field("Framing, angle and composition, e.g. extreme close-up, low angle."),
            "lighting": field("Lighting scheme and quality, e.g. rim lighting, golden hour, volumetric."),
            "details": field("Fine detail, texture and overall quality, e.g. intricate, 8K."),
            "weather": field("Weather and atmosphere, e.g. dense fog at dawn, melancholic sunset."),
            "camera": field("Camera, lens or perspective, e.g. anamorphic lens, drone view."),
            "depthOfField": field("Depth-of-field effect, e.g. creamy bokeh, sharp focus throughout."),
            "motion": field("(VIDEO ONLY) Camera or scene motion, e.g. slow pan, fast tracking shot.")
        },
        "required": ["subject"]
    })
}

impl GeminiClient {
    /// Sends the composed prompt for enhancement and parses the structured
    /// reply into a complete `PromptState`. Fields absent from the reply come
    /// back as empty strings; the caller replaces its state wholesale.
    pub async fn enhance_prompt(
        &self,
        prompt: &str,
        generator_type: GeneratorType,
    ) -> Result<PromptState, EnhanceError> {
        let body = json!({
            "systemInstruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
            "contents": [{
                "parts": [{
                    "text": format!(
                        "Analyze and transform this idea for type '{}': \"{}\"",
                        generator_type, prompt
                    )
                }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt_schema()
            }
        });

        let url = self.model_url(&self.config().enhance_model, "generateContent");
        let response = self.post_json(&url, &body).await.map_err(map_api_error)?;
        let payload: GenerateContentResponse =
            response.json().await.map_err(EnhanceError::Request)?;

        let text = payload.first_text().ok_or(EnhanceError::EmptyResponse)?;
        parse_enhanced_state(text)
    }
}

/// Parses the model's JSON text into a `PromptState`. Serde defaulting fills
/// any missing field with an empty string.
pub fn parse_enhanced_state(text: &str) -> Result<PromptState, EnhanceError> {
    Ok(serde_json::from_str(text.trim())?)
}

fn map_api_error(err: ApiError) -> EnhanceError {
    match err {
        ApiError::Transport(e) => EnhanceError::Request(e),
        ApiError::Status { status, body } => EnhanceError::Api { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_response() {
        let state = parse_enhanced_state(
            r#"{
                "subject": "an ancient oak tree",
                "action": "swaying in a storm",
                "style": "cinematic",
                "composition": "wide shot",
                "lighting": "volumetric",
                "details": "8K",
                "weather": "thunderstorm",
                "camera": "anamorphic lens",
                "depthOfField": "deep focus",
                "motion": "slow push-in"
            }"#,
        )
        .unwrap();

        assert_eq!(state.subject, "an ancient oak tree");
        assert_eq!(state.motion, "slow push-in");
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let state = parse_enhanced_state(r#"{"subject": "a lone astronaut"}"#).unwrap();
        assert_eq!(state.subject, "a lone astronaut");
        assert_eq!(state.action, "");
        assert_eq!(state.depth_of_field, "");
        assert_eq!(state.motion, "");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let state = parse_enhanced_state("  {\"subject\": \"x\"}\n").unwrap();
        assert_eq!(state.subject, "x");
    }

    #[test]
    fn non_json_text_is_rejected() {
        let err = parse_enhanced_state("I cannot answer that.").unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidJson(_)));
    }

    #[test]
    fn schema_requires_subject() {
        let schema = prompt_schema();
        assert_eq!(schema["required"][0], "subject");
        assert!(schema["properties"]["depthOfField"].is_object());
    }
}
