use helpdesk_core::Ticket;

use crate::report::{RiskFlag, Severity};

const CRITICAL_REASON: &str =
    "Critical priority ticket outstanding, customer impact likely severe.";
const ESCALATED_REASON: &str =
    "Escalated ticket requires leadership visibility and fast resolution.";

/// One flag per critical or escalated ticket, in input order.
/// Critical priority takes precedence when both apply.
pub fn risk_flags(tickets: &[Ticket]) -> Vec<RiskFlag> {
    tickets
        .iter()
        .filter(|t| t.is_at_risk())
        .map(|t| {
            let (reason, severity) = if t.is_critical() {
                (CRITICAL_REASON, Severity::High)
            } else {
                (ESCALATED_REASON, Severity::Medium)
            };
            RiskFlag {
                ticket_id: t.id.clone(),
                reason: reason.to_string(),
                severity,
            }
        })
        .collect()
}
