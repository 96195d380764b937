use helpdesk_core::Ticket;

pub(crate) const FINANCE: &str = "Coordinate with finance to resolve escalated billing disputes \
     within 24 hours and proactively communicate updates to affected customers.";
pub(crate) const PERFORMANCE: &str = "Prioritise a performance triage: capture load metrics and \
     deploy short-term fixes to improve dashboard responsiveness.";
pub(crate) const DOCUMENTATION: &str = "Refresh the API integration documentation with a guided \
     setup flow to reduce onboarding friction.";
pub(crate) const MAINTAIN: &str = "Maintain current service levels and continue monitoring for \
     new patterns in customer feedback.";
pub(crate) const WEEKLY_REVIEW: &str = "Introduce a weekly cross-functional review of \
     high-priority tickets to improve time-to-resolution.";

/// Pattern-driven recommendations. Patterns are checked independently; the
/// weekly review is always last.
pub fn recommendations(tickets: &[Ticket]) -> Vec<String> {
    let escalated_billing = tickets
        .iter()
        .any(|t| t.is_escalated() && t.category_contains("billing"));
    let slow_performance = tickets
        .iter()
        .any(|t| t.category_contains("performance") || t.issue_contains("slow"));
    let documentation = tickets.iter().any(|t| t.category_contains("documentation"));

    let mut out: Vec<String> = [
        (escalated_billing, FINANCE),
        (slow_performance, PERFORMANCE),
        (documentation, DOCUMENTATION),
    ]
    .into_iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, rec)| rec.to_string())
    .collect();

    if out.is_empty() {
        out.push(MAINTAIN.to_string());
    }
    out.push(WEEKLY_REVIEW.to_string());
    out
}
