//! Risk reasons derived from threshold checks on the activity signals.

use crate::types::RiskInput;

pub const LOW_COMMITS: &str = "Low commit activity";
pub const DEADLINE_APPROACHING: &str = "Deadline approaching";
pub const LOW_COMPLETION: &str = "Low task completion";
pub const HIGH_BUG_COUNT: &str = "High bug count";

/// Independent checks in fixed order; an absent signal never fires.
pub fn compute_top_reasons(input: &RiskInput) -> Vec<String> {
  let mut reasons = Vec::new();
  if input.commits_last7_days.is_some_and(|c| c < 3) {
    reasons.push(LOW_COMMITS.to_string());
  }
  if input.deadline_days.is_some_and(|d| d < 7) {
    reasons.push(DEADLINE_APPROACHING.to_string());
  }
  if input.task_completion_rate.is_some_and(|r| r < 0.6) {
    reasons.push(LOW_COMPLETION.to_string());
  }
  if input.open_bugs.is_some_and(|b| b > 3) {
    reasons.push(HIGH_BUG_COUNT.to_string());
  }
  reasons
}
