//! Response types owned by the API layer (risk types live in risk-engine).

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: String,
}

impl ErrorBody {
  pub fn new(error: impl Into<String>) -> Self {
    Self {
      error: error.into(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
  pub status: &'static str,
}

impl WebhookAck {
  pub fn ok() -> Self {
    Self { status: "ok" }
  }
}
