//! Client configuration, resolved from the environment once at startup.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Environment variable holding the API key. Required.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Optional overrides for the API base URL and per-action models.
pub const API_BASE_ENV: &str = "PROMPTFORGE_API_BASE";
pub const ENHANCE_MODEL_ENV: &str = "PROMPTFORGE_ENHANCE_MODEL";
pub const IMAGE_MODEL_ENV: &str = "PROMPTFORGE_IMAGE_MODEL";
pub const VIDEO_MODEL_ENV: &str = "PROMPTFORGE_VIDEO_MODEL";

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_ENHANCE_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
const DEFAULT_VIDEO_MODEL: &str = "veo-2.0-generate-001";

/// Connection settings for the generative API.
#[derive(Debug)]
pub struct ClientConfig {
    pub api_key: SecretString,
    pub api_base: String,
    pub enhance_model: String,
    pub image_model: String,
    pub video_model: String,
}

impl ClientConfig {
    /// Builds a config from the environment. Missing `GEMINI_API_KEY` is an
    /// error; everything else falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = read_env(API_KEY_ENV)?.ok_or(ConfigError::MissingApiKey {
            name: API_KEY_ENV.to_string(),
        })?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_base: read_env(API_BASE_ENV)?.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            enhance_model: read_env(ENHANCE_MODEL_ENV)?
                .unwrap_or_else(|| DEFAULT_ENHANCE_MODEL.to_string()),
            image_model: read_env(IMAGE_MODEL_ENV)?
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            video_model: read_env(VIDEO_MODEL_ENV)?
                .unwrap_or_else(|| DEFAULT_VIDEO_MODEL.to_string()),
        })
    }

    /// Config with defaults and an explicit key, for embedding and tests.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            api_base: DEFAULT_API_BASE.to_string(),
            enhance_model: DEFAULT_ENHANCE_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
        }
    }
}

fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(value)),
        Ok(_) => Ok(None),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::EnvVarNotUnicode {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            API_KEY_ENV,
            API_BASE_ENV,
            ENHANCE_MODEL_ENV,
            IMAGE_MODEL_ENV,
            VIDEO_MODEL_ENV,
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn missing_api_key_is_an_error() {
        clear_env();
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    #[serial]
    fn defaults_apply_when_only_key_is_set() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "test-key");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.enhance_model, DEFAULT_ENHANCE_MODEL);
        assert_eq!(config.video_model, DEFAULT_VIDEO_MODEL);

        clear_env();
    }

    #[test]
    #[serial]
    fn overrides_take_precedence() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "test-key");
        std::env::set_var(API_BASE_ENV, "http://localhost:9000/v1beta");
        std::env::set_var(VIDEO_MODEL_ENV, "veo-test");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base, "http://localhost:9000/v1beta");
        assert_eq!(config.video_model, "veo-test");
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);

        clear_env();
    }
}
