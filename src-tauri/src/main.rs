// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod commands;
mod events;
mod state;

use std::sync::Arc;

use log::info;
use tauri::Manager;
use tokio::sync::RwLock;

use state::TauriAppState;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    info!("Starting Promptforge Desktop v{}", env!("CARGO_PKG_VERSION"));

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let app_handle = app.handle().clone();

            app.manage(Arc::new(RwLock::new(TauriAppState::new())));

            // Start event bridge
            tauri::async_runtime::spawn(async move {
                events::start_event_bridge(app_handle).await;
            });

            info!("Promptforge Desktop initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Prompt commands
            commands::compose_prompt,
            commands::enhance_prompt,
            // Generation commands
            commands::generation_status,
            commands::generate_image,
            commands::generate_video,
            // Preset commands
            commands::save_preset,
            commands::delete_preset,
            commands::load_preset,
            commands::list_presets,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
