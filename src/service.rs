//! Conversion service: validation, strategy selection, persistence.
//!
//! Shared by the HTTP shim and the CLI. Holds only immutable state, so one
//! instance behind an `Arc` serves every request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::converter::{ChainOutput, Converter, FallbackChain, LlmConverter, RuleConverter, Strategy};
use crate::engine::Dialect;
use crate::ollama::OllamaClient;
use crate::storage::ArtifactStore;
use crate::types::{Config, Error, Result};
use crate::validation::validate_source;

/// Strategy requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Text-generation first, rule engine on failure.
    #[default]
    Llm,
    /// Rule engine only.
    #[serde(alias = "rule")]
    Regex,
}

impl ConversionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionMode::Llm => "llm",
            ConversionMode::Regex => "regex",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(Self::Llm),
            "regex" | "rule" => Ok(Self::Regex),
            other => Err(Error::validation(format!("Unsupported mode: {}", other))),
        }
    }
}

/// One conversion job.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub source: String,
    pub dialect: Dialect,
    pub mode: ConversionMode,
}

/// Result of a persisted conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub playwright_code: String,
    pub file_path: PathBuf,
    pub mode_used: Strategy,
}

/// Reachability of the text-generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LlmStatus {
    pub available: bool,
    pub models: Vec<String>,
}

#[derive(Debug)]
pub struct ConversionService {
    chain: FallbackChain,
    rules: RuleConverter,
    client: OllamaClient,
    store: ArtifactStore,
}

impl ConversionService {
    pub fn new(
        primary: Box<dyn Converter>,
        client: OllamaClient,
        store: ArtifactStore,
        llm_timeout: Duration,
    ) -> Self {
        let rules = RuleConverter::standard();
        Self {
            chain: FallbackChain::new(primary, rules.clone(), llm_timeout),
            rules,
            client,
            store,
        }
    }

    /// Wire the Ollama-backed chain and artifact store from configuration.
    pub fn from_config(config: &Config) -> Self {
        let client = OllamaClient::new(&config.llm);
        Self::new(
            Box::new(LlmConverter::new(client.clone())),
            client,
            ArtifactStore::new(&config.storage.output_dir),
            config.llm.timeout,
        )
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Convert without persisting.
    pub async fn translate(&self, source: &str, dialect: Dialect, mode: ConversionMode) -> ChainOutput {
        match mode {
            ConversionMode::Llm => self.chain.run(source, dialect).await,
            ConversionMode::Regex => ChainOutput {
                code: self.rules.convert_now(source, dialect),
                strategy: Strategy::Regex,
            },
        }
    }

    /// Validate, convert and persist one document.
    #[instrument(skip(self, request), fields(dialect = %request.dialect, mode = %request.mode))]
    pub async fn convert(&self, request: ConvertRequest) -> Result<ConvertOutcome> {
        let source = validate_source(Some(request.source.as_str()))?;
        let output = self.translate(source, request.dialect, request.mode).await;
        let file_path = self
            .store
            .save(&output.code, request.dialect, output.strategy.artifact_prefix())
            .await?;

        debug!(mode_used = %output.strategy, path = %file_path.display(), "conversion stored");
        Ok(ConvertOutcome {
            playwright_code: output.code,
            file_path,
            mode_used: output.strategy,
        })
    }

    /// Probe the backend; unreachable counts as unavailable, not as an error.
    pub async fn llm_status(&self) -> LlmStatus {
        match self.client.check_connection().await {
            Ok(models) => LlmStatus {
                available: true,
                models,
            },
            Err(e) => {
                debug!(error = %e, "llm backend unavailable");
                LlmStatus {
                    available: false,
                    models: Vec::new(),
                }
            }
        }
    }
}
