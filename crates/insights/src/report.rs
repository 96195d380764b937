use std::fmt;

use serde::{Deserialize, Serialize};

use helpdesk_core::TicketId;

/// Where an insight came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    Remote,
    Heuristic,
}

impl InsightSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightSource::Remote => "remote",
            InsightSource::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for InsightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub source: InsightSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Percentage split of ticket sentiment. The three buckets always sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSplit {
    pub overall: String,
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

impl SentimentSplit {
    pub fn total(&self) -> u16 {
        self.positive as u16 + self.neutral as u16 + self.negative as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Case-insensitive parse of `high` / `medium` / `low`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFlag {
    pub ticket_id: TicketId,
    pub reason: String,
    pub severity: Severity,
}

/// Aggregate analytics over a ticket collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub sentiment: SentimentSplit,
    /// At most four entries.
    pub trends: Vec<String>,
    pub risk_flags: Vec<RiskFlag>,
    pub recommendations: Vec<String>,
    pub provenance: Provenance,
}

impl AnalyticsReport {
    pub fn source(&self) -> InsightSource {
        self.provenance.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub text: String,
    pub source: InsightSource,
}

/// Header counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub open: usize,
    pub escalated: usize,
    pub critical: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_camel_case() {
        let report = AnalyticsReport {
            sentiment: SentimentSplit {
                overall: "stable".into(),
                positive: 20,
                neutral: 50,
                negative: 30,
            },
            trends: vec![],
            risk_flags: vec![RiskFlag {
                ticket_id: "TK-001".into(),
                reason: "r".into(),
                severity: Severity::High,
            }],
            recommendations: vec![],
            provenance: Provenance {
                source: InsightSource::Heuristic,
                note: None,
            },
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["riskFlags"][0]["ticketId"], "TK-001");
        assert_eq!(v["riskFlags"][0]["severity"], "high");
        assert_eq!(v["provenance"]["source"], "heuristic");
        assert!(v["provenance"].get("note").is_none());
    }

    #[test]
    fn severity_parse_is_case_insensitive() {
        assert_eq!(Severity::parse(" HIGH "), Some(Severity::High));
        assert_eq!(Severity::parse("Medium"), Some(Severity::Medium));
        assert_eq!(Severity::parse("urgent"), None);
    }
}
