//! Service configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PREDICTOR_URL: &str = "http://127.0.0.1:8000/predict-risk";

#[derive(Debug, Clone)]
pub struct Config {
  pub host: IpAddr,
  pub port: u16,
  /// External predictor endpoint; `None` runs the API in offline mode.
  pub predictor_url: Option<String>,
  pub predictor_timeout: Duration,
  /// Emit JSON log lines instead of human-readable text.
  pub log_json: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 3000,
      predictor_url: Some(DEFAULT_PREDICTOR_URL.to_string()),
      predictor_timeout: Duration::from_millis(5000),
      log_json: false,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Build from any variable source; unset variables keep their defaults.
  pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let mut config = Config::default();

    if let Some(v) = get("HOST") {
      config.host = parse_var("HOST", &v)?;
    }
    if let Some(v) = get("PORT") {
      config.port = parse_var("PORT", &v)?;
    }
    if let Some(v) = get("RISK_PREDICTOR_URL") {
      let v = v.trim();
      config.predictor_url = if v.is_empty() || v.eq_ignore_ascii_case("off") {
        None
      } else {
        Some(v.to_string())
      };
    }
    if let Some(v) = get("RISK_PREDICTOR_TIMEOUT_MS") {
      let ms: u64 = parse_var("RISK_PREDICTOR_TIMEOUT_MS", &v)?;
      config.predictor_timeout = Duration::from_millis(ms);
    }
    if let Some(v) = get("LOG_FORMAT") {
      config.log_json = match v.as_str() {
        "json" | "JSON" => true,
        "text" | "TEXT" | "" => false,
        _ => return Err(ConfigError::invalid("LOG_FORMAT", &v, "expected text or json")),
      };
    }

    Ok(config)
  }

  pub fn bind_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  value
    .trim()
    .parse()
    .map_err(|e: T::Err| ConfigError::invalid(name, value, &e.to_string()))
}
