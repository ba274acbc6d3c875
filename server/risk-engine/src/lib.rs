//! RiskPulse Risk Engine: threshold rule, fallback, and the JSON contract.
//! Used by the binary for stdin/stdout and by the API service as a library.

mod error;
mod fallback;
mod risk;
mod score;
mod types;

pub use error::EngineError;
pub use fallback::fallback;
pub use score::RiskLevel;
pub use types::{Output, RiskAssessment, RiskInput};

/// Decode a RiskInput from a JSON body. Unknown fields are ignored.
pub fn parse_input(raw: &[u8]) -> Result<RiskInput, EngineError> {
  Ok(serde_json::from_slice(raw)?)
}

/// Offline assessment: threshold reasons with fixed scores (no I/O).
pub fn assess(input: &RiskInput) -> RiskAssessment {
  RiskAssessment {
    failure_risk: score::LOCAL_FAILURE_RISK,
    confidence: score::LOCAL_CONFIDENCE,
    top_reasons: risk::compute_top_reasons(input),
    recommendations: score::local_recommendations(),
  }
}

/// Run the engine on parsed input and return the binary output.
pub fn run(input: &RiskInput) -> Output {
  let assessment = assess(input);
  let risk_level = RiskLevel::from_score(assessment.failure_risk);
  Output {
    assessment,
    risk_level,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn input(commits: u32, deadline: i64, completion: f64, bugs: u32) -> RiskInput {
    RiskInput {
      project_id: None,
      commits_last7_days: Some(commits),
      deadline_days: Some(deadline),
      task_completion_rate: Some(completion),
      open_bugs: Some(bugs),
    }
  }

  #[test]
  fn struggling_project_hits_every_reason_in_order() {
    let out = assess(&input(2, 5, 0.4, 5));
    assert_eq!(
      out.top_reasons,
      vec![
        "Low commit activity",
        "Deadline approaching",
        "Low task completion",
        "High bug count",
      ]
    );
  }

  #[test]
  fn healthy_project_has_no_reasons() {
    let out = assess(&input(10, 30, 0.9, 0));
    assert!(out.top_reasons.is_empty());
    assert_eq!(out.failure_risk, 0.72);
    assert_eq!(out.confidence, 0.86);
    assert_eq!(out.recommendations.len(), 3);
  }

  #[test]
  fn assess_is_pure() {
    let i = input(1, 2, 0.1, 9);
    assert_eq!(assess(&i), assess(&i));
  }

  #[test]
  fn fallback_matches_contract() {
    let f = fallback();
    assert_eq!(f.failure_risk, 0.74);
    assert_eq!(f.confidence, 0.88);
    assert_eq!(f.top_reasons, vec!["Low commit activity", "Deadline approaching"]);
    assert_eq!(
      f.recommendations,
      vec!["Increase commit frequency", "Begin testing phase"]
    );
    assert!(f.validate().is_ok());
  }

  #[test]
  fn run_reports_risk_level() {
    let out = run(&RiskInput::default());
    assert_eq!(out.risk_level, RiskLevel::High);
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["riskLevel"], "high");
    assert_eq!(v["assessment"]["failureRisk"], 0.72);
  }

  #[test]
  fn parse_input_rejects_non_json() {
    let err = parse_input(b"not json").unwrap_err();
    assert!(matches!(err, EngineError::Json(_)));
  }
}
