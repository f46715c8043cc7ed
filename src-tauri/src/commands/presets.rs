//! Saved prompt preset commands.

use std::sync::Arc;

use promptforge::{GeneratorType, PromptState, SavedPrompt};
use tauri::State;
use tokio::sync::RwLock;

use super::ApiResponse;
use crate::state::TauriAppState;

/// Snapshot the current field values as a new preset.
#[tauri::command]
pub async fn save_preset(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
    parts: PromptState,
    generator_type: GeneratorType,
) -> Result<ApiResponse<SavedPrompt>, String> {
    let mut state = state.write().await;
    let preset = state.presets.save(&parts, generator_type);
    Ok(ApiResponse::ok(preset))
}

/// Delete a preset by id.
#[tauri::command]
pub async fn delete_preset(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
    id: String,
) -> Result<ApiResponse<()>, String> {
    let mut state = state.write().await;
    if state.presets.delete(&id) {
        Ok(ApiResponse::ok(()))
    } else {
        Ok(ApiResponse::err(format!("Preset not found: {}", id)))
    }
}

/// Fetch a saved preset's snapshot, for loading into the editor. The
/// snapshot includes the generator type active at save time.
#[tauri::command]
pub async fn load_preset(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
    id: String,
) -> Result<ApiResponse<SavedPrompt>, String> {
    let state = state.read().await;
    match state.presets.get(&id) {
        Some(preset) => Ok(ApiResponse::ok(preset.clone())),
        None => Ok(ApiResponse::err(format!("Preset not found: {}", id))),
    }
}

/// All saved presets, newest first.
#[tauri::command]
pub async fn list_presets(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
) -> Result<ApiResponse<Vec<SavedPrompt>>, String> {
    let state = state.read().await;
    Ok(ApiResponse::ok(state.presets.list_newest_first()))
}
