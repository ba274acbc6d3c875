//! Risk Predictor Gateway: one call to the external ML service, fallback on any failure.

use std::time::Duration;

use risk_engine::{RiskAssessment, RiskInput, RiskLevel};
use tracing::{debug, warn};

use crate::error::GatewayError;

#[derive(Debug, Clone)]
pub struct Gateway {
  client: reqwest::Client,
  url: String,
}

impl Gateway {
  pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      url: url.into(),
    })
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  /// Ask the predictor; never fails. Errors are logged and replaced by the fallback.
  pub async fn predict(&self, input: &RiskInput) -> RiskAssessment {
    match self.call(input).await {
      Ok(assessment) => {
        debug!(
          url = %self.url,
          failure_risk = assessment.failure_risk,
          risk_level = RiskLevel::from_score(assessment.failure_risk).as_str(),
          "predictor answered"
        );
        assessment
      }
      Err(e) => {
        warn!(url = %self.url, error = %e, "predictor unavailable, serving fallback");
        risk_engine::fallback()
      }
    }
  }

  async fn call(&self, input: &RiskInput) -> Result<RiskAssessment, GatewayError> {
    let resp = self.client.post(&self.url).json(input).send().await?;
    let status = resp.status();
    if !status.is_success() {
      return Err(GatewayError::Status(status));
    }
    let assessment: RiskAssessment = resp.json().await?;
    assessment.validate()?;
    Ok(assessment)
  }
}
