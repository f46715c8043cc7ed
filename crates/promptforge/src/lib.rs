pub mod broadcast;
pub mod config;
pub mod error;
pub mod gemini;
pub mod poller;
pub mod presets;
pub mod prompt;
pub mod status;
pub mod storage;

pub use broadcast::{GenerationBroadcaster, GenerationEvent, GenerationPhase};
pub use config::ClientConfig;
pub use error::{
    ConfigError, EnhanceError, GenerationError, PromptforgeError, Result, StorageError,
};
pub use gemini::{ApiError, GeminiClient, VideoApi};
pub use poller::{progress_message, VideoJobRunner, POLL_INTERVAL};
pub use presets::{PresetStore, SavedPrompt};
pub use prompt::{GeneratorType, PromptState};
pub use status::ApiStatus;
pub use storage::{JsonFileStore, KeyValueStore, MediaStore};
