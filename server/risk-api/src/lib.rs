//! RiskPulse Risk API
//!
//! HTTP service behind the dashboard: scores project failure risk through the
//! external ML predictor (with a canned fallback) or, with no predictor
//! configured, through the local threshold rule.
//! Binds to 127.0.0.1 by default.

pub mod config;
mod error;
mod gateway;
mod handlers;
mod state;
mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::Config;
pub use error::{ApiError, ConfigError, GatewayError};
pub use gateway::Gateway;
pub use handlers::{github_webhook, health, risk};
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/api/risk", post(risk))
    .route("/api/webhook/github", post(github_webhook))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(Arc::new(state))
}
