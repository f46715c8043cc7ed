//! Prompt composition and AI enhancement commands.

use std::sync::Arc;

use log::error;
use promptforge::{GeneratorType, PromptState};
use tauri::State;
use tokio::sync::RwLock;

use super::ApiResponse;
use crate::state::TauriAppState;

const ENHANCE_ERROR: &str =
    "Failed to enhance the prompt with AI. The model response might not be valid JSON.";

/// Derive the final prompt string from the current field values.
#[tauri::command]
pub fn compose_prompt(
    parts: PromptState,
    generator_type: GeneratorType,
) -> ApiResponse<String> {
    ApiResponse::ok(parts.compose(generator_type))
}

/// Enhance the composed prompt into a richer, fully populated field set.
/// The returned state replaces the caller's fields wholesale.
#[tauri::command]
pub async fn enhance_prompt(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
    parts: PromptState,
    generator_type: GeneratorType,
) -> Result<ApiResponse<PromptState>, String> {
    let prompt = parts.compose(generator_type);
    if prompt.is_empty() {
        return Ok(ApiResponse::err("There is no prompt to enhance."));
    }

    let client = {
        let state = state.read().await;
        match state.client() {
            Ok(client) => client,
            Err(e) => return Ok(ApiResponse::err(e)),
        }
    };

    match client.enhance_prompt(&prompt, generator_type).await {
        Ok(enhanced) => Ok(ApiResponse::ok(enhanced)),
        Err(e) => {
            error!("Failed to enhance prompt: {}", e);
            Ok(ApiResponse::err(ENHANCE_ERROR))
        }
    }
}
