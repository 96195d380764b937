use helpdesk_core::Ticket;

use super::percent;

const TOP_CATEGORIES: usize = 3;
const MAX_TRENDS: usize = 4;

const NO_TRENDS: &str = "No dominant trends detected across the current ticket set.";

/// Top categories by share of tickets, then an escalation count if any.
pub fn trends(tickets: &[Ticket]) -> Vec<String> {
    let total = tickets.len().max(1) as f64;

    // First-seen order is kept so the stable sort breaks ties by it.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for t in tickets {
        match counts.iter_mut().find(|entry| entry.0 == t.category) {
            Some(entry) => entry.1 += 1,
            None => counts.push((t.category.as_str(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out: Vec<String> = counts
        .iter()
        .take(TOP_CATEGORIES)
        .map(|(category, count)| {
            format!(
                "{category} issues represent {}% of all tickets.",
                percent(*count as f64, total)
            )
        })
        .collect();

    if out.is_empty() {
        out.push(NO_TRENDS.to_string());
    }

    let escalated = tickets.iter().filter(|t| t.is_escalated()).count();
    if escalated > 0 {
        out.push(escalation_note(escalated));
    }

    out.truncate(MAX_TRENDS);
    out
}

fn escalation_note(count: usize) -> String {
    if count == 1 {
        "1 ticket has been escalated and requires rapid follow-up.".to_string()
    } else {
        format!("{count} tickets have been escalated and require rapid follow-up.")
    }
}
