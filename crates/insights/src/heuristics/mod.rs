//! Rule-based analytics over a ticket collection.
//!
//! Every function here is pure and total: any slice of tickets, including an
//! empty one, yields a well-formed result.

mod recommendations;
mod risk;
mod sentiment;
mod stats;
mod summary;
mod trends;

pub use recommendations::recommendations;
pub use risk::risk_flags;
pub use sentiment::sentiment_split;
pub use stats::dashboard_stats;
pub use summary::heuristic_summary;
pub use trends::trends;

use helpdesk_core::Ticket;

use crate::report::{AnalyticsReport, InsightSource, Provenance};

/// Attached to every heuristic report, whether or not a remote call was tried.
pub const HEURISTIC_NOTE: &str = "Insights generated with on-device heuristics. \
     Provide a Gemini API key to unlock live generative analysis.";

/// Full analytics report computed locally.
pub fn heuristic_report(tickets: &[Ticket]) -> AnalyticsReport {
    AnalyticsReport {
        sentiment: sentiment_split(tickets),
        trends: trends(tickets),
        risk_flags: risk_flags(tickets),
        recommendations: recommendations(tickets),
        provenance: Provenance {
            source: InsightSource::Heuristic,
            note: Some(HEURISTIC_NOTE.to_string()),
        },
    }
}

/// Percentage of `count` in `total`, rounded half away from zero.
fn percent(count: f64, total: f64) -> i64 {
    (count / total * 100.0).round() as i64
}

#[cfg(test)]
pub(crate) mod fixtures {
    use helpdesk_core::{Priority, Ticket, TicketStatus};

    pub fn ticket(id: &str, status: TicketStatus, priority: Priority, category: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            customer: format!("Customer {id}"),
            issue: "Something is broken.".to_string(),
            status,
            priority,
            category: category.to_string(),
            created_at: chrono::Utc::now(),
            assigned_to: None,
        }
    }

    /// Every status × priority combination over a few categories.
    pub fn combinations() -> Vec<Ticket> {
        let statuses = [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Escalated,
        ];
        let priorities = [Priority::Low, Priority::Medium, Priority::High, Priority::Critical];
        let categories = ["Billing", "Performance", "Email"];

        let mut out = Vec::new();
        for (i, status) in statuses.iter().enumerate() {
            for (j, priority) in priorities.iter().enumerate() {
                let id = format!("TK-{i}{j}");
                out.push(ticket(&id, *status, *priority, categories[(i + j) % 3]));
            }
        }
        out
    }
}
