//! Configuration structures.
//!
//! Configuration is loaded from an optional JSON file and then overridden by
//! environment variables (`SEL2PW_*`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::errors::{Error, Result};

/// Global service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Text-generation backend configuration.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Artifact storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from a JSON file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Apply `SEL2PW_*` environment overrides on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment in production,
    /// a map in tests).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("SEL2PW_LISTEN_ADDR") {
            self.server.listen_addr = addr;
        }
        if let Some(url) = lookup("SEL2PW_OLLAMA_URL") {
            self.llm.base_url = url;
        }
        if let Some(model) = lookup("SEL2PW_OLLAMA_MODEL") {
            self.llm.model = model;
        }
        if let Some(timeout) = lookup("SEL2PW_LLM_TIMEOUT") {
            self.llm.timeout = humantime::parse_duration(&timeout).map_err(|e| {
                Error::validation(format!("SEL2PW_LLM_TIMEOUT '{}' is invalid: {}", timeout, e))
            })?;
        }
        if let Some(dir) = lookup("SEL2PW_OUTPUT_DIR") {
            self.storage.output_dir = PathBuf::from(dir);
        }
        Ok(self)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address (TCP).
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5001".to_string(),
        }
    }
}

/// Ollama text-generation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the Ollama REST API.
    pub base_url: String,

    /// Model name passed to `/api/generate`.
    pub model: String,

    /// Sampling temperature. Kept low so conversions stay close to deterministic.
    pub temperature: f32,

    /// Upper bound on one LLM conversion before falling back to the rule engine.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "gemma3:1b".to_string(),
            temperature: 0.1,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Where converted artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory; one timestamped subdirectory is created per conversion.
    pub output_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("conversions"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
