//! Support-ticket insights: a deterministic heuristic engine plus an
//! orchestrator that prefers a remote LLM and degrades to the heuristics.

pub mod error;
pub mod heuristics;
pub mod orchestrator;
pub mod prompts;
pub mod report;
pub mod validate;

pub use error::RemoteError;
pub use heuristics::{dashboard_stats, heuristic_report, heuristic_summary};
pub use orchestrator::InsightOrchestrator;
pub use report::{
    AnalyticsReport, DashboardStats, InsightSource, Provenance, RiskFlag, SentimentSplit,
    Severity, SummaryResult,
};
