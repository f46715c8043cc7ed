//! Event bridge between the promptforge library and the Tauri frontend.

use std::sync::Arc;

use log::{debug, info, warn};
use tauri::{AppHandle, Emitter, Manager};
use tokio::sync::RwLock;

use crate::state::TauriAppState;

/// Event names for Tauri events.
pub mod event_names {
    pub const GENERATION_PROGRESS: &str = "promptforge://generation-progress";
}

/// Starts the bridge that forwards generation progress events to the webview.
pub async fn start_event_bridge(app_handle: AppHandle) {
    info!("Starting event bridge");

    let state: &Arc<RwLock<TauriAppState>> =
        app_handle.state::<Arc<RwLock<TauriAppState>>>().inner();

    let broadcaster = {
        let state = state.read().await;
        state.broadcaster.clone()
    };

    let mut rx = broadcaster.subscribe();
    loop {
        match rx.recv().await {
            Ok(event) => {
                if let Err(e) = app_handle.emit(event_names::GENERATION_PROGRESS, &event) {
                    debug!("Failed to emit generation progress event: {}", e);
                }
            }
            Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                warn!("Generation event bridge lagged, missed {} events", n);
            }
            Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                info!("Generation broadcaster closed, stopping event bridge");
                break;
            }
        }
    }
}
