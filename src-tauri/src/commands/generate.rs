//! Image and video generation commands.
//!
//! Each command converts any stage failure into a single user-facing message
//! and keeps the detail in the log. The UI disables the trigger while
//! `generation_status` is loading, which is what enforces one job at a time.

use std::sync::Arc;

use log::error;
use promptforge::{
    ApiStatus, GenerationEvent, GeneratorType, PromptState, VideoJobRunner,
};
use tauri::State;
use tokio::sync::RwLock;

use super::ApiResponse;
use crate::state::TauriAppState;

const IMAGE_ERROR: &str = "Failed to generate the image. Check the log for details.";
const VIDEO_ERROR: &str = "Failed to generate the video. Check the log for details.";
const EMPTY_PROMPT_ERROR: &str = "The prompt cannot be empty.";

/// Current user-visible status of the generation slot.
#[tauri::command]
pub async fn generation_status(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
) -> Result<ApiResponse<ApiStatus>, String> {
    let state = state.read().await;
    Ok(ApiResponse::ok(state.generation_status))
}

/// Generate one image for the composed prompt. Single round trip; the result
/// is a data URL usable directly as an image source.
#[tauri::command]
pub async fn generate_image(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
    parts: PromptState,
) -> Result<ApiResponse<String>, String> {
    let prompt = parts.compose(GeneratorType::Image);
    if prompt.is_empty() {
        return Ok(ApiResponse::err(EMPTY_PROMPT_ERROR));
    }

    let client = {
        let mut state = state.write().await;
        let client = match state.client() {
            Ok(client) => client,
            Err(e) => return Ok(ApiResponse::err(e)),
        };
        state.generation_status.start();
        client
    };

    match client.generate_image(&prompt).await {
        Ok(data_url) => {
            state.write().await.generation_status.succeed();
            Ok(ApiResponse::ok(data_url))
        }
        Err(e) => {
            error!("Failed to generate image: {}", e);
            state.write().await.generation_status.fail();
            Ok(ApiResponse::err(IMAGE_ERROR))
        }
    }
}

/// Generate a video for the composed prompt: submit, poll until done,
/// download, and return the local file path of the result. Progress is
/// streamed to the webview through the event bridge.
#[tauri::command]
pub async fn generate_video(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
    parts: PromptState,
) -> Result<ApiResponse<String>, String> {
    let prompt = parts.compose(GeneratorType::Video);
    if prompt.is_empty() {
        return Ok(ApiResponse::err(EMPTY_PROMPT_ERROR));
    }

    let (client, media, broadcaster) = {
        let mut state = state.write().await;
        let client = match state.client() {
            Ok(client) => client,
            Err(e) => return Ok(ApiResponse::err(e)),
        };
        let media = match state.media() {
            Ok(media) => media,
            Err(e) => return Ok(ApiResponse::err(e)),
        };
        state.generation_status.start();
        (client, media, state.broadcaster.clone())
    };

    let job_id = uuid::Uuid::new_v4().to_string();
    let runner = VideoJobRunner::new(client, broadcaster.clone());

    let stored = match runner.run(&job_id, &prompt).await {
        Ok(bytes) => media.store(&bytes, "mp4").map_err(promptforge::PromptforgeError::from),
        Err(e) => Err(e.into()),
    };

    match stored {
        Ok(path) => {
            let path = path.to_string_lossy().into_owned();
            broadcaster.send(GenerationEvent::completed(&job_id, &path));
            state.write().await.generation_status.succeed();
            Ok(ApiResponse::ok(path))
        }
        Err(e) => {
            error!("Failed to generate video: {}", e);
            broadcaster.send(GenerationEvent::failed(&job_id, &e.to_string()));
            state.write().await.generation_status.fail();
            Ok(ApiResponse::err(VIDEO_ERROR))
        }
    }
}
