//! Configuration management for Athena services.
//!
//! The chat front-end and the mock API share a single configuration file at
//! `~/.athena/config.json`.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (see below)
//! 2. Explicit config file values
//! 3. Default values
//!
//! # Environment Variable Mapping
//!
//! - `PORT` / `ATHENA_API_PORT` → api.port (`ATHENA_API_PORT` wins)
//! - `ATHENA_BIND_ADDRESS` → network.bind
//! - `ATHENA_LOG_LEVEL` → observability.log_level
//! - `ATHENA_LOG_FORMAT` → observability.log_format

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    directories::UserDirs::new().map_or_else(
        || PathBuf::from(".athena"),
        |dirs| dirs.home_dir().join(".athena"),
    )
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

// ============================================================================
// Network Configuration
// ============================================================================

/// Global network configuration.
///
/// Default is `127.0.0.1` (local only). Set to `0.0.0.0` to allow remote access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_bind_address")]
    pub bind: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".into()
}

// ============================================================================
// API Configuration
// ============================================================================

/// Mock academic API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Port the HTTP service listens on
    #[serde(default = "default_api_port")]
    pub port: u16,

    /// Directory of static front-end assets served at `/` (optional)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: default_api_port(),
            static_dir: None,
        }
    }
}

fn default_api_port() -> u16 {
    3000
}

// ============================================================================
// Assistant Configuration
// ============================================================================

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Seconds between session timer ticks (one tick = one study minute)
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,

    /// Retention score a fresh session starts with (0-100)
    #[serde(default = "default_retention_score")]
    pub retention_score: u8,

    /// Speak assistant responses through the presentation port
    #[serde(default = "default_true")]
    pub voice_responses: bool,

    /// External text-to-speech command (e.g. `espeak`); text is passed as the last argument
    #[serde(default)]
    pub speech_command: Option<String>,

    /// Directory exported session files are written to (defaults to the current directory)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Key-value file holding persisted preferences (defaults to `~/.athena/preferences.json`)
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            retention_score: default_retention_score(),
            voice_responses: true,
            speech_command: None,
            export_dir: None,
            preferences_path: None,
        }
    }
}

impl AssistantConfig {
    /// Resolved path of the preference store.
    pub fn preferences_file(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(|| config_dir().join("preferences.json"))
    }

    /// Resolved export directory.
    pub fn export_directory(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn default_tick_interval_secs() -> u64 {
    60
}

fn default_retention_score() -> u8 {
    84
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level", alias = "level")]
    pub log_level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format", alias = "format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration shared by every Athena binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Load configuration with environment variable overrides.
    pub fn load_with_env() -> Result<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // PORT first so the namespaced variable takes precedence
        for key in ["PORT", "ATHENA_API_PORT"] {
            if let Some(port) = lookup(key) {
                match port.parse() {
                    Ok(p) => self.api.port = p,
                    Err(_) => tracing::warn!(key, value = %port, "Ignoring invalid port override"),
                }
            }
        }

        if let Some(bind) = lookup("ATHENA_BIND_ADDRESS") {
            self.network.bind = bind;
        }

        if let Some(level) = lookup("ATHENA_LOG_LEVEL") {
            self.observability.log_level = level;
        }

        if let Some(format) = lookup("ATHENA_LOG_FORMAT") {
            self.observability.log_format = format;
        }
    }

    /// Socket address string for the API service.
    pub fn api_addr(&self) -> String {
        format!("{}:{}", self.network.bind, self.api.port)
    }
}
