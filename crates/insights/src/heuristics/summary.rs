use helpdesk_core::{Priority, Ticket, TicketStatus};

use crate::report::{InsightSource, SummaryResult};

const EMPTY_ISSUE: &str = "the customer raised an issue";

/// One-sentence summary built from the ticket fields.
pub fn heuristic_summary(ticket: &Ticket) -> SummaryResult {
    let urgency = match ticket.priority {
        Priority::Critical => "needs urgent attention from the team",
        Priority::High => "should be addressed in the next response cycle",
        Priority::Medium | Priority::Low => "can be resolved during regular support hours",
    };

    let status_note = match ticket.status {
        TicketStatus::Resolved => "is already resolved, confirm customer satisfaction",
        TicketStatus::InProgress => "is actively being worked on, keep the customer informed",
        TicketStatus::Escalated => "is escalated and requires leadership alignment",
        TicketStatus::Open => "is waiting in the queue for triage",
    };

    SummaryResult {
        text: format!(
            "{} reports a {} {} issue where {}, {}, and {}.",
            ticket.customer,
            ticket.priority,
            ticket.category.to_lowercase(),
            normalize_issue(&ticket.issue),
            urgency,
            status_note,
        ),
        source: InsightSource::Heuristic,
    }
}

/// Trim, drop one trailing period, lower-case the first character.
fn normalize_issue(issue: &str) -> String {
    let trimmed = issue.trim();
    let base = trimmed.strip_suffix('.').unwrap_or(trimmed);

    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => EMPTY_ISSUE.to_string(),
    }
}
