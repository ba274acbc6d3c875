//! Fixed scores, recommendations, and gauge bands.

use serde::Serialize;

/// Offline-mode scores; not derived from the thresholds.
pub const LOCAL_FAILURE_RISK: f64 = 0.72;
pub const LOCAL_CONFIDENCE: f64 = 0.86;

pub fn local_recommendations() -> Vec<String> {
  [
    "Increase daily commits",
    "Start testing immediately",
    "Fix high-priority bugs",
  ]
  .iter()
  .map(|s| s.to_string())
  .collect()
}

/// Dashboard gauge band for a failure risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

impl RiskLevel {
  pub fn from_score(failure_risk: f64) -> Self {
    if failure_risk < 0.33 {
      RiskLevel::Low
    } else if failure_risk < 0.66 {
      RiskLevel::Medium
    } else {
      RiskLevel::High
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      RiskLevel::Low => "low",
      RiskLevel::Medium => "medium",
      RiskLevel::High => "high",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bands_follow_gauge_colors() {
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.329), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0.33), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(0.65), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(0.66), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(LOCAL_FAILURE_RISK), RiskLevel::High);
  }
}
