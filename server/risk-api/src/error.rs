//! Error types for the API service.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

use crate::types::ErrorBody;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("invalid request body: {0}")]
  BadRequest(String),
}

impl From<risk_engine::EngineError> for ApiError {
  fn from(e: risk_engine::EngineError) -> Self {
    Self::BadRequest(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorBody::new(self.to_string()))).into_response()
  }
}

/// Reasons the predictor call did not produce a usable assessment.
/// Never leaves the gateway; every variant ends in the fallback.
#[derive(Debug, Error)]
pub enum GatewayError {
  #[error("predictor call: {0}")]
  Http(#[from] reqwest::Error),

  #[error("upstream returned {0}")]
  Status(reqwest::StatusCode),

  #[error("upstream body rejected: {0}")]
  Invalid(#[from] risk_engine::EngineError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config: {var}={value:?}: {reason}")]
  Invalid {
    var: String,
    value: String,
    reason: String,
  },
}

impl ConfigError {
  pub fn invalid(var: &str, value: &str, reason: &str) -> Self {
    Self::Invalid {
      var: var.to_string(),
      value: value.to_string(),
      reason: reason.to_string(),
    }
  }
}
