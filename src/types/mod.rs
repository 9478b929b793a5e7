//! Core types for the converter service.
//!
//! - **IDs**: Strongly-typed identifiers (RequestId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for server, LLM backend and storage

mod config;
mod errors;
mod ids;

pub use config::{Config, LlmConfig, ObservabilityConfig, ServerConfig, StorageConfig};
pub use errors::{Error, Result};
pub use ids::RequestId;
