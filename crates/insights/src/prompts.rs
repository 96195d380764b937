//! Prompt construction for the remote insight calls.
//!
//! Templates live in `prompts/` and are embedded at compile time; each
//! `<<<name>>>` placeholder is filled once.

use helpdesk_core::Ticket;

const ANALYTICS_TEMPLATE: &str = include_str!("../prompts/analytics.md");
const SUMMARY_TEMPLATE: &str = include_str!("../prompts/summary.md");

const TICKETS_PLACEHOLDER: &str = "<<<tickets>>>";

/// System instruction shared by both prompt shapes.
pub const SYSTEM_PROMPT: &str =
    "You are a customer support analytics officer. Be factual and concise.";

/// Bulk analytics prompt embedding the full ticket set as JSON.
pub fn analytics_prompt(tickets: &[Ticket]) -> String {
    let tickets_json =
        serde_json::to_string_pretty(tickets).unwrap_or_else(|_| "[]".to_string());
    ANALYTICS_TEMPLATE.replace(TICKETS_PLACEHOLDER, &tickets_json)
}

/// Single-ticket prompt asking for exactly one sentence.
pub fn summary_prompt(ticket: &Ticket) -> String {
    SUMMARY_TEMPLATE
        .replace("<<<customer>>>", &ticket.customer)
        .replace("<<<issue>>>", &ticket.issue)
        .replace("<<<priority>>>", ticket.priority.as_str())
        .replace("<<<category>>>", &ticket.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::dataset::sample_tickets;

    #[test]
    fn analytics_template_has_single_placeholder() {
        assert_eq!(ANALYTICS_TEMPLATE.matches(TICKETS_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn analytics_prompt_embeds_tickets_and_contract() {
        let prompt = analytics_prompt(&sample_tickets());
        assert!(!prompt.contains(TICKETS_PLACEHOLDER));
        assert!(prompt.contains("\"id\": \"TK-012\""));
        assert!(prompt.contains("\"riskFlags\""));
        assert!(prompt.contains("Return ONLY valid JSON, no markdown formatting."));
    }

    #[test]
    fn analytics_prompt_for_empty_set() {
        let prompt = analytics_prompt(&[]);
        assert!(prompt.contains("Support Tickets:\n[]"));
    }

    #[test]
    fn summary_prompt_fills_every_field() {
        let tickets = sample_tickets();
        let prompt = summary_prompt(&tickets[7]);
        assert!(prompt.contains("Customer: Robert Taylor"));
        assert!(prompt.contains("Priority: critical"));
        assert!(prompt.contains("Category: Billing"));
        assert!(prompt.contains("one sentence only"));
        assert!(!prompt.contains("<<<"));
    }
}
