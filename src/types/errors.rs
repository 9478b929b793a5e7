//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context. The rewrite engine itself never returns
//! these; they belong to the layers around it (LLM client, storage, HTTP shim).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the converter service.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation errors (map to HTTP 400).
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found (map to HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The text-generation service failed or flagged its own response as an error.
    #[error("llm error: {0}")]
    Llm(String),

    /// Timeout (map to HTTP 504).
    #[error("timeout: {0}")]
    Timeout(String),

    /// A rewrite rule pattern failed to compile.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// Internal errors (map to HTTP 500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport errors talking to the text-generation service.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Convert to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Error::Llm(_) | Error::Http(_) => StatusCode::BAD_GATEWAY,
            Error::InvalidRule(_)
            | Error::Internal(_)
            | Error::Serialization(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to HTTP clients. Validation messages are passed through
    /// verbatim; everything else keeps its category prefix.
    pub fn client_message(&self) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn invalid_rule(msg: impl Into<String>) -> Self {
        Self::InvalidRule(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// Implement IntoResponse to enable ? in axum handlers
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "status": "error",
            "message": self.client_message(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}
