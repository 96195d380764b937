//! Dashboard API endpoints.
//!
//! Each sub-module owns a single responsibility area.
//! Shared error types live here in mod.rs.

mod health;
mod insights;
mod tickets;


use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn not_found(what: impl Into<String>) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: what.into(),
        }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────

pub use health::{config, health, stats};
pub use insights::analytics;
pub use tickets::{tickets_get, tickets_list, tickets_summary};
