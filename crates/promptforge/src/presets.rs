//! Saved prompt presets, persisted through the key-value storage capability.
//!
//! The collection is append-ordered and persisted on every change. Corrupt or
//! absent storage degrades to an empty list; persistence failures are logged
//! and never fail the user action.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::prompt::{GeneratorType, PromptState};
use crate::storage::KeyValueStore;

/// Storage key holding the JSON array of saved prompts.
const PRESETS_KEY: &str = "saved_prompts";

/// An immutable snapshot of the prompt fields at save time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrompt {
    /// Opaque unique identifier.
    pub id: String,
    /// Creation time, milliseconds since epoch.
    pub timestamp: i64,
    /// Snapshot of the prompt fields.
    pub prompt: PromptState,
    /// Generator type active at save time.
    #[serde(rename = "type")]
    pub generator_type: GeneratorType,
}

/// Append-only preset list backed by a [`KeyValueStore`].
pub struct PresetStore {
    storage: Box<dyn KeyValueStore>,
    prompts: Vec<SavedPrompt>,
}

impl PresetStore {
    /// Opens the store, rehydrating any previously saved presets. A missing
    /// key or an unreadable/mis-shaped payload yields an empty list.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let prompts = match storage.get(PRESETS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<SavedPrompt>>(&raw) {
                Ok(prompts) => prompts,
                Err(e) => {
                    warn!("Stored presets are not valid JSON, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load presets from storage, starting empty: {}", e);
                Vec::new()
            }
        };

        Self { storage, prompts }
    }

    /// Snapshots the given prompt state as a new preset and persists the
    /// collection. Returns the created record.
    pub fn save(&mut self, prompt: &PromptState, generator_type: GeneratorType) -> SavedPrompt {
        let preset = SavedPrompt {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            prompt: prompt.clone(),
            generator_type,
        };

        self.prompts.push(preset.clone());
        self.persist();
        preset
    }

    /// Deletes the preset with the given id. Returns whether anything was
    /// removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != id);

        let removed = self.prompts.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Looks up a preset snapshot by id.
    pub fn get(&self, id: &str) -> Option<&SavedPrompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// All presets in display order, newest first.
    pub fn list_newest_first(&self) -> Vec<SavedPrompt> {
        self.prompts.iter().rev().cloned().collect()
    }

    /// All presets in append order.
    pub fn list(&self) -> &[SavedPrompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    // Write failures degrade the preset feature, they do not fail the action.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.prompts) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize presets: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(PRESETS_KEY, &json) {
            warn!("Failed to persist presets: {}", e);
        }
    }
}

/// In-memory storage used by tests and by callers without a durable medium.
#[derive(Default)]
pub struct MemoryStore {
    values: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
