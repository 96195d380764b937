//! Built-in sample tickets and optional JSON file loading.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::HelpdeskError;
use crate::ticket::{Priority, Ticket, TicketStatus};

fn ts(raw: &str) -> DateTime<Utc> {
    // Literals below are all valid RFC 3339; epoch is unreachable.
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    customer: &str,
    issue: &str,
    status: TicketStatus,
    priority: Priority,
    category: &str,
    created_at: &str,
    assigned_to: Option<&str>,
) -> Ticket {
    Ticket {
        id: id.to_string(),
        customer: customer.to_string(),
        issue: issue.to_string(),
        status,
        priority,
        category: category.to_string(),
        created_at: ts(created_at),
        assigned_to: assigned_to.map(str::to_string),
    }
}

/// The twelve demo tickets shown on the dashboard.
pub fn sample_tickets() -> Vec<Ticket> {
    use Priority::*;
    use TicketStatus::*;

    vec![
        ticket(
            "TK-001",
            "Sarah Johnson",
            "Unable to login to account after password reset. Getting \"invalid credentials\" error repeatedly.",
            Escalated,
            Critical,
            "Authentication",
            "2024-11-10T08:30:00Z",
            Some("Tech Support Team"),
        ),
        ticket(
            "TK-002",
            "Michael Chen",
            "Payment processing failed multiple times. Transaction shows as pending but amount was deducted.",
            Open,
            High,
            "Billing",
            "2024-11-11T10:15:00Z",
            None,
        ),
        ticket(
            "TK-003",
            "Emily Rodriguez",
            "Dashboard loading very slowly, sometimes takes 30+ seconds to display data.",
            InProgress,
            Medium,
            "Performance",
            "2024-11-11T14:20:00Z",
            Some("Dev Team"),
        ),
        ticket(
            "TK-004",
            "David Kim",
            "Mobile app crashes when trying to upload profile picture. Happens consistently on iOS.",
            Open,
            High,
            "Mobile App",
            "2024-11-12T09:00:00Z",
            None,
        ),
        ticket(
            "TK-005",
            "Lisa Anderson",
            "Export to PDF feature not working. Button clicks but nothing happens.",
            Resolved,
            Medium,
            "Features",
            "2024-11-09T16:45:00Z",
            Some("Frontend Team"),
        ),
        ticket(
            "TK-006",
            "James Wilson",
            "Notification emails not being received. Checked spam folder, nothing there.",
            InProgress,
            Medium,
            "Email",
            "2024-11-12T11:30:00Z",
            Some("Infrastructure"),
        ),
        ticket(
            "TK-007",
            "Maria Garcia",
            "Cannot delete saved items from wishlist. Delete button appears but does nothing when clicked.",
            Open,
            Low,
            "Features",
            "2024-11-13T13:15:00Z",
            None,
        ),
        ticket(
            "TK-008",
            "Robert Taylor",
            "Account was charged twice for the same subscription. Need urgent refund for duplicate charge.",
            Escalated,
            Critical,
            "Billing",
            "2024-11-13T15:00:00Z",
            Some("Finance Team"),
        ),
        ticket(
            "TK-009",
            "Jennifer Lee",
            "Cannot access premium features despite active subscription. Shows \"upgrade required\" message.",
            Open,
            High,
            "Subscription",
            "2024-11-13T16:20:00Z",
            None,
        ),
        ticket(
            "TK-010",
            "Thomas Brown",
            "Dark mode toggle not working properly. Interface keeps reverting to light mode.",
            Resolved,
            Low,
            "UI/UX",
            "2024-11-08T10:00:00Z",
            Some("Frontend Team"),
        ),
        ticket(
            "TK-011",
            "Amanda White",
            "Search functionality returns no results even for exact matches. Tried multiple search terms.",
            InProgress,
            High,
            "Search",
            "2024-11-13T17:45:00Z",
            Some("Backend Team"),
        ),
        ticket(
            "TK-012",
            "Christopher Moore",
            "API integration documentation is outdated. Following steps results in authentication errors.",
            Open,
            Medium,
            "Documentation",
            "2024-11-14T08:00:00Z",
            None,
        ),
    ]
}

/// Load tickets from a JSON array file, rejecting duplicate ids.
pub fn load_tickets(path: &Path) -> Result<Vec<Ticket>, HelpdeskError> {
    let raw = std::fs::read_to_string(path)?;
    let tickets: Vec<Ticket> = serde_json::from_str(&raw)
        .map_err(|e| HelpdeskError::Serialize(format!("{}: {e}", path.display())))?;

    let mut seen = HashSet::new();
    for t in &tickets {
        if !seen.insert(t.id.as_str()) {
            return Err(HelpdeskError::DuplicateTicket(t.id.clone()));
        }
    }

    info!(path = %path.display(), count = tickets.len(), "loaded tickets from file");
    Ok(tickets)
}

/// Load from `path` when given, otherwise fall back to the sample set.
pub fn load_or_sample(path: Option<&Path>) -> Result<Vec<Ticket>, HelpdeskError> {
    match path {
        Some(p) => load_tickets(p),
        None => Ok(sample_tickets()),
    }
}
