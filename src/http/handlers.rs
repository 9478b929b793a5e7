//! Request handlers for `/convert` and `/health`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};

use super::AppState;
use crate::converter::Strategy;
use crate::engine::Dialect;
use crate::service::{ConversionMode, ConvertRequest};
use crate::types::{Error, RequestId, Result};
use crate::validation::validate_source;

pub const SUCCESS_MESSAGE: &str = "Conversion completed successfully";

fn default_language() -> String {
    Dialect::default().language().to_string()
}

/// `POST /convert` body.
#[derive(Debug, Deserialize)]
pub struct ConvertBody {
    #[serde(default)]
    pub selenium_code: Option<String>,
    #[serde(default = "default_language")]
    pub target_language: String,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub status: &'static str,
    pub playwright_code: String,
    pub file_path: String,
    pub message: &'static str,
    pub mode_used: Strategy,
    pub request_id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub llm_available: bool,
    pub models: Vec<String>,
}

pub async fn convert(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ConvertBody>, JsonRejection>,
) -> Result<Json<ConvertResponse>> {
    let request_id = RequestId::new();
    let span = info_span!("convert", request_id = %request_id);
    handle_convert(state, payload, request_id).instrument(span).await
}

async fn handle_convert(
    state: AppState,
    payload: std::result::Result<Json<ConvertBody>, JsonRejection>,
    request_id: RequestId,
) -> Result<Json<ConvertResponse>> {
    let Json(body) = payload.map_err(|rejection| {
        Error::validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let source = validate_source(body.selenium_code.as_deref())?.to_string();
    let dialect = body.target_language.parse::<Dialect>()?;
    let mode = match body.mode.as_deref() {
        Some(mode) => mode.parse::<ConversionMode>()?,
        None => ConversionMode::default(),
    };

    let outcome = state
        .service
        .convert(ConvertRequest {
            source,
            dialect,
            mode,
        })
        .await?;

    info!(mode_used = %outcome.mode_used, "conversion served");
    Ok(Json(ConvertResponse {
        status: "success",
        playwright_code: outcome.playwright_code,
        file_path: outcome.file_path.display().to_string(),
        message: SUCCESS_MESSAGE,
        mode_used: outcome.mode_used,
        request_id: request_id.to_string(),
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.service.llm_status().await;
    Json(HealthResponse {
        status: "ok",
        llm_available: status.available,
        models: status.models,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults() {
        let body: ConvertBody = serde_json::from_str(r#"{"selenium_code": "x();"}"#).unwrap();
        assert_eq!(body.target_language, "typescript");
        assert!(body.mode.is_none());

        let body: ConvertBody = serde_json::from_str("{}").unwrap();
        assert!(validate_source(body.selenium_code.as_deref()).is_err());
    }

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(ConvertResponse {
            status: "success",
            playwright_code: "code".into(),
            file_path: "conversions/x/converted_test.ts".into(),
            message: SUCCESS_MESSAGE,
            mode_used: Strategy::RegexFallback,
            request_id: "id".into(),
        })
        .unwrap();
        assert_eq!(json["mode_used"], "regex_fallback");
        assert_eq!(json["message"], "Conversion completed successfully");
    }
}
