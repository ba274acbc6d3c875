//! Binary entrypoint for the risk API.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use risk_api::{build_router, AppState, Config};

fn init_tracing(json: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  if json {
    tracing_subscriber::registry()
      .with(filter)
      .with(tracing_subscriber::fmt::layer().json())
      .init();
  } else {
    tracing_subscriber::registry()
      .with(filter)
      .with(tracing_subscriber::fmt::layer())
      .init();
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?;
  init_tracing(config.log_json);

  let state = AppState::from_config(&config)?;
  match &state.gateway {
    Some(gateway) => info!(predictor = gateway.url(), "forwarding risk requests"),
    None => info!("no predictor configured, scoring with local thresholds"),
  }
  let app = build_router(state);

  let addr = config.bind_addr();
  let listener = tokio::net::TcpListener::bind(addr).await?;
  info!(%addr, "risk-api listening");
  axum::serve(listener, app).await?;

  Ok(())
}
