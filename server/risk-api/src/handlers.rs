//! HTTP handlers for the risk API.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use risk_engine::RiskAssessment;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::WebhookAck;

pub async fn health() -> &'static str {
  "ok"
}

pub async fn risk(
  State(state): State<Arc<AppState>>,
  body: Bytes,
) -> Result<Json<RiskAssessment>, ApiError> {
  let input = risk_engine::parse_input(&body)?;

  let assessment = match &state.gateway {
    Some(gateway) => gateway.predict(&input).await,
    None => risk_engine::assess(&input),
  };
  Ok(Json(assessment))
}

pub async fn github_webhook(headers: HeaderMap, body: Bytes) -> Result<Json<WebhookAck>, ApiError> {
  let payload: serde_json::Value =
    serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let event = headers
    .get("x-github-event")
    .and_then(|v| v.to_str().ok())
    .unwrap_or("unknown");
  let repository = payload
    .pointer("/repository/full_name")
    .and_then(|v| v.as_str())
    .unwrap_or("unknown");
  let commits = payload
    .get("commits")
    .and_then(|v| v.as_array())
    .map_or(0, |c| c.len());

  // Signal extraction into RiskInput is not wired up yet.
  info!(event, repository, commits, "github webhook received");
  Ok(Json(WebhookAck::ok()))
}
