//! POST /analytics: aggregate report over the loaded tickets.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::info;

use helpdesk_insights::AnalyticsReport;

use crate::state::AppState;

pub async fn analytics(State(state): State<Arc<AppState>>) -> Json<AnalyticsReport> {
    let report = state.insights.analytics_report(&state.tickets).await;
    info!(
        source = %report.source(),
        trends = report.trends.len(),
        risk_flags = report.risk_flags.len(),
        "analytics report generated"
    );
    Json(report)
}
