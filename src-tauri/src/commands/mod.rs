//! Tauri commands for the Promptforge desktop application.
//!
//! Commands are organized by domain:
//! - `prompt`: Final-prompt composition and AI enhancement
//! - `generate`: Image and video generation
//! - `presets`: Saved prompt management

pub mod generate;
pub mod presets;
pub mod prompt;

// Re-export all commands for convenient registration
pub use generate::*;
pub use presets::*;
pub use prompt::*;

use serde::Serialize;

/// Response wrapper for API calls.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
