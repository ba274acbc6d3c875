//! Input/output types for the risk engine (JSON contract with the dashboard and the ML service).

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Activity signals for one project. Every field is optional: absent fields
/// stay absent and are skipped when the input is forwarded upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskInput {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub commits_last7_days: Option<u32>,
  /// Days until the deadline; negative once it has passed.
  #[serde(default, alias = "daysToDeadline", skip_serializing_if = "Option::is_none")]
  pub deadline_days: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub task_completion_rate: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub open_bugs: Option<u32>,
}

/// Failure risk prediction returned to the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
  pub failure_risk: f64,
  pub confidence: f64,
  pub top_reasons: Vec<String>,
  pub recommendations: Vec<String>,
}

impl RiskAssessment {
  /// Check that both scores are finite and within [0, 1].
  pub fn validate(&self) -> Result<(), EngineError> {
    check_unit("failureRisk", self.failure_risk)?;
    check_unit("confidence", self.confidence)
  }
}

fn check_unit(field: &str, value: f64) -> Result<(), EngineError> {
  if !value.is_finite() {
    return Err(EngineError::validation(field, "must be a finite number"));
  }
  if !(0.0..=1.0).contains(&value) {
    return Err(EngineError::validation(field, "must be within [0, 1]"));
  }
  Ok(())
}

/// Binary output: the assessment plus its gauge band.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
  pub assessment: RiskAssessment,
  pub risk_level: crate::score::RiskLevel,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_stay_absent() {
    let input: RiskInput = serde_json::from_str(r#"{"openBugs": 4, "extra": true}"#).unwrap();
    assert_eq!(input.open_bugs, Some(4));
    assert_eq!(input.commits_last7_days, None);
    assert_eq!(serde_json::to_string(&input).unwrap(), r#"{"openBugs":4}"#);
  }

  #[test]
  fn deadline_accepts_ml_service_name() {
    let input: RiskInput = serde_json::from_str(r#"{"daysToDeadline": -2}"#).unwrap();
    assert_eq!(input.deadline_days, Some(-2));
  }

  #[test]
  fn negative_count_is_rejected() {
    assert!(serde_json::from_str::<RiskInput>(r#"{"commitsLast7Days": -1}"#).is_err());
  }

  #[test]
  fn assessment_uses_camel_case_keys() {
    let a = RiskAssessment {
      failure_risk: 0.5,
      confidence: 0.5,
      top_reasons: vec![],
      recommendations: vec![],
    };
    let v = serde_json::to_value(&a).unwrap();
    for key in ["failureRisk", "confidence", "topReasons", "recommendations"] {
      assert!(v.get(key).is_some(), "missing {}", key);
    }
  }

  #[test]
  fn validate_rejects_out_of_range_scores() {
    let mut a = RiskAssessment {
      failure_risk: 1.2,
      confidence: 0.9,
      top_reasons: vec![],
      recommendations: vec![],
    };
    let err = a.validate().unwrap_err();
    assert!(err.to_string().contains("failureRisk"));

    a.failure_risk = 0.3;
    a.confidence = f64::NAN;
    let err = a.validate().unwrap_err();
    assert!(err.to_string().contains("confidence"));

    a.confidence = 1.0;
    assert!(a.validate().is_ok());
  }
}
