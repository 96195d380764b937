//! Health, redacted config, and dashboard header counts.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use helpdesk_insights::{dashboard_stats, DashboardStats};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tickets: usize,
    /// Whether insight calls will try the remote model first.
    pub llm_configured: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        tickets: state.tickets.len(),
        llm_configured: state.insights.is_remote_enabled(),
    })
}

pub async fn config(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.config.redacted_summary())
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    Json(dashboard_stats(&state.tickets))
}
