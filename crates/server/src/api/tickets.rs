//! Ticket listing, lookup, and per-ticket quick summaries.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use helpdesk_core::{Priority, Ticket, TicketStatus};
use helpdesk_insights::SummaryResult;

use super::{not_found, ApiError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
}

impl TicketFilter {
    fn matches(&self, ticket: &Ticket) -> bool {
        self.status.map_or(true, |s| ticket.status == s)
            && self.priority.map_or(true, |p| ticket.priority == p)
    }
}

pub async fn tickets_list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TicketFilter>,
) -> Json<Vec<Ticket>> {
    let tickets = state
        .tickets
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    Json(tickets)
}

pub async fn tickets_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError> {
    state
        .ticket(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("ticket '{id}' not found")))
}

/// POST /tickets/{id}/summary
///
/// Always 200 for a known ticket; `source` says whether the model or the
/// local template wrote the sentence.
pub async fn tickets_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResult>, ApiError> {
    let ticket = state
        .ticket(&id)
        .ok_or_else(|| not_found(format!("ticket '{id}' not found")))?;

    let summary = state.insights.quick_summary(ticket).await;
    info!(ticket = %id, source = %summary.source, "quick summary generated");
    Ok(Json(summary))
}
