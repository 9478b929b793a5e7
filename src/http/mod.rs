//! HTTP request/response shim (axum).
//!
//! - `POST /convert`: `{selenium_code, target_language?, mode?}` → converted code
//!   plus the stored artifact path
//! - `GET /health`: backend reachability

pub mod handlers;
pub mod server;

pub use server::{router, HttpServer};

use std::sync::Arc;

use crate::service::ConversionService;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<ConversionService>,
}
