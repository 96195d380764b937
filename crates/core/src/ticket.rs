use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticket identifier (e.g. "TK-001").
pub type TicketId = String;

/// One customer support case. Tickets are read-only inputs to every
/// analytics pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub customer: String,
    pub issue: String,
    pub status: TicketStatus,
    pub priority: Priority,
    /// Free-text label, used for grouping and keyword matching.
    pub category: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl Ticket {
    pub fn is_escalated(&self) -> bool {
        self.status == TicketStatus::Escalated
    }

    pub fn is_critical(&self) -> bool {
        self.priority == Priority::Critical
    }

    /// Critical priority or escalated status.
    pub fn is_at_risk(&self) -> bool {
        self.is_critical() || self.is_escalated()
    }

    /// Case-insensitive substring match on the category label.
    pub fn category_contains(&self, needle: &str) -> bool {
        self.category
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Case-insensitive substring match on the issue text.
    pub fn issue_contains(&self, needle: &str) -> bool {
        self.issue.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Escalated,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Escalated => "escalated",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_json() -> &'static str {
        r#"{
            "id": "TK-100",
            "customer": "Alice",
            "issue": "Invoice total is wrong.",
            "status": "in-progress",
            "priority": "high",
            "category": "Billing",
            "createdAt": "2024-11-10T08:30:00Z"
        }"#
    }

    #[test]
    fn deserializes_wire_format() {
        let t: Ticket = serde_json::from_str(ticket_json()).unwrap();
        assert_eq!(t.status, TicketStatus::InProgress);
        assert_eq!(t.priority, Priority::High);
        assert!(t.assigned_to.is_none());
    }

    #[test]
    fn omits_missing_assignee_when_serialized() {
        let t: Ticket = serde_json::from_str(ticket_json()).unwrap();
        let v = serde_json::to_value(&t).unwrap();
        assert!(v.get("assignedTo").is_none());
        assert_eq!(v["status"], "in-progress");
        assert!(v.get("createdAt").is_some());
    }

    #[test]
    fn keyword_matching_ignores_case() {
        let t: Ticket = serde_json::from_str(ticket_json()).unwrap();
        assert!(t.category_contains("billing"));
        assert!(t.issue_contains("invoice"));
        assert!(t.category_contains("Billing"));
        assert!(t.category_contains("BILL"));
        assert!(t.issue_contains("INVOICE Total"));
        assert!(!t.is_at_risk());
    }
}
