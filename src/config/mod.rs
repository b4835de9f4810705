//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config` and
//! `dotenvy` crates. Values come from an optional `local.settings.json` under
//! a base path, then from environment variables with the `VOICE_TASK` prefix
//! (nested values use double underscores as separators), which win.
//!
//! # Example
//!
//! ```no_run
//! use voice_task_skill::config::ConfigProvider;
//!
//! let provider = ConfigProvider::new();
//! let config = provider.get(".").expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Skip validation: {}", config.voice.skip_request_validation);
//! ```

mod error;
mod orchestration;
mod provider;
mod server;
mod voice;

pub use error::{ConfigError, ValidationError};
pub use orchestration::{OrchestrationBackend, OrchestrationConfig};
pub use provider::ConfigProvider;
pub use server::ServerConfig;
pub use voice::VoiceConfig;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings file looked up under the base path.
pub const SETTINGS_FILE: &str = "local.settings.json";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "VOICE_TASK";

/// Directory searched for the settings file.
pub const BASE_PATH_VAR: &str = "VOICE_TASK_BASE_PATH";

/// Resolve the configuration base path.
///
/// Loads `.env` first so `VOICE_TASK_BASE_PATH` may come from it. Falls back
/// to the current directory.
pub fn base_path() -> PathBuf {
    dotenvy::dotenv().ok();

    std::env::var_os(BASE_PATH_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Voice platform configuration (request validation)
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Orchestration host configuration
    #[serde(default)]
    pub orchestration: OrchestrationConfig,
}

impl AppConfig {
    /// Load configuration rooted at `base_path`
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `<base_path>/local.settings.json` if it exists
    /// 3. Reads environment variables with `VOICE_TASK` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VOICE_TASK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VOICE_TASK__VOICE__SKIP_REQUEST_VALIDATION=true` -> `voice.skip_request_validation = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the settings file is malformed or values
    /// cannot be parsed into expected types.
    pub fn load_from(base_path: &Path) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::File::from(base_path.join(SETTINGS_FILE))
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.voice.validate()?;
        self.orchestration.validate()?;
        Ok(())
    }
}

/// Serializes tests that touch process-wide environment variables.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
