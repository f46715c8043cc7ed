//! Prompt field model and final-prompt composition.

use serde::{Deserialize, Serialize};

/// Which synthesis endpoint a prompt targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorType {
    Image,
    Video,
}

impl std::fmt::Display for GeneratorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorType::Image => write!(f, "image"),
            GeneratorType::Video => write!(f, "video"),
        }
    }
}

/// The labeled prompt fields. An empty string means "unset"; no field is
/// individually validated. `motion` is meaningful only for video prompts.
///
/// Every field defaults to empty when absent, so a partial JSON object (for
/// example an enhancer response without `action`) deserializes into a fully
/// populated state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptState {
    pub subject: String,
    pub action: String,
    pub style: String,
    pub composition: String,
    pub lighting: String,
    pub details: String,
    pub weather: String,
    pub camera: String,
    pub depth_of_field: String,
    pub motion: String,
}

impl PromptState {
    /// Concatenates the non-empty fields, in fixed order, joined by ", ".
    ///
    /// The order is subject, action, style, composition, lighting, weather,
    /// camera, depth of field, details; `motion` is appended last and only
    /// when composing for video.
    pub fn compose(&self, generator_type: GeneratorType) -> String {
        let mut parts: Vec<&str> = vec![
            &self.subject,
            &self.action,
            &self.style,
            &self.composition,
            &self.lighting,
            &self.weather,
            &self.camera,
            &self.depth_of_field,
            &self.details,
        ];
        if generator_type == GeneratorType::Video {
            parts.push(&self.motion);
        }

        parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// True when composing for the given type yields an empty prompt.
    pub fn is_empty(&self, generator_type: GeneratorType) -> bool {
        self.compose(generator_type).is_empty()
    }
}
