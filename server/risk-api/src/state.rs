//! Shared handler state.

use crate::config::Config;
use crate::gateway::Gateway;

pub struct AppState {
  /// `None` when no predictor is configured; `/api/risk` then scores locally.
  pub gateway: Option<Gateway>,
}

impl AppState {
  pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
    let gateway = match &config.predictor_url {
      Some(url) => Some(Gateway::new(url.clone(), config.predictor_timeout)?),
      None => None,
    };
    Ok(Self { gateway })
  }

  pub fn offline() -> Self {
    Self { gateway: None }
  }
}
