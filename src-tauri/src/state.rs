//! Application state management for Tauri.

use std::sync::Arc;

use log::warn;
use promptforge::presets::MemoryStore;
use promptforge::{
    ApiStatus, ClientConfig, GeminiClient, GenerationBroadcaster, JsonFileStore, MediaStore,
    PresetStore,
};

/// Directory name used under the platform config and cache roots.
const APP_DIR_NAME: &str = "promptforge";

/// Application state managed by Tauri.
pub struct TauriAppState {
    /// API client, absent when no API key is configured.
    client: Option<Arc<GeminiClient>>,

    /// Saved prompt presets, rehydrated from local storage at startup.
    pub presets: PresetStore,

    /// Generation progress broadcaster for UI updates.
    pub broadcaster: GenerationBroadcaster,

    /// Local store for downloaded video results.
    media: Option<Arc<MediaStore>>,

    /// User-visible status of the active generation action.
    pub generation_status: ApiStatus,
}

impl TauriAppState {
    /// Creates the state, resolving configuration from the environment.
    /// A missing API key or data directory degrades the matching feature
    /// instead of failing startup; commands report the problem when used.
    pub fn new() -> Self {
        let client = match ClientConfig::from_env() {
            Ok(config) => Some(Arc::new(GeminiClient::new(config))),
            Err(e) => {
                warn!("Generative API unavailable: {}", e);
                None
            }
        };

        let presets = match JsonFileStore::in_config_dir(APP_DIR_NAME) {
            Ok(storage) => PresetStore::open(Box::new(storage)),
            Err(e) => {
                warn!("Preset storage unavailable, presets will not persist: {}", e);
                PresetStore::open(Box::new(MemoryStore::default()))
            }
        };

        let media = match MediaStore::in_cache_dir(APP_DIR_NAME) {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                warn!("Media storage unavailable: {}", e);
                None
            }
        };

        Self {
            client,
            presets,
            broadcaster: GenerationBroadcaster::default(),
            media,
            generation_status: ApiStatus::Idle,
        }
    }

    pub fn client(&self) -> Result<Arc<GeminiClient>, String> {
        self.client
            .clone()
            .ok_or_else(|| "No API key configured. Set GEMINI_API_KEY and restart.".to_string())
    }

    pub fn media(&self) -> Result<Arc<MediaStore>, String> {
        self.media
            .clone()
            .ok_or_else(|| "No writable cache directory available.".to_string())
    }
}

impl Default for TauriAppState {
    fn default() -> Self {
        Self::new()
    }
}
