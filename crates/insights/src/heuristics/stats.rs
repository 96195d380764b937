use helpdesk_core::{Ticket, TicketStatus};

use crate::report::DashboardStats;

/// Header counts: total, open, escalated and critical tickets.
pub fn dashboard_stats(tickets: &[Ticket]) -> DashboardStats {
    DashboardStats {
        total: tickets.len(),
        open: tickets.iter().filter(|t| t.status == TicketStatus::Open).count(),
        escalated: tickets.iter().filter(|t| t.is_escalated()).count(),
        critical: tickets.iter().filter(|t| t.is_critical()).count(),
    }
}
