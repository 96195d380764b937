//! Runtime validation of remote analytics output.
//!
//! The LLM reply is untrusted text. It is parsed into a loose wire shape and
//! then checked field by field; any violation rejects the whole reply.

use std::collections::HashSet;

use serde::Deserialize;

use helpdesk_core::Ticket;
use helpdesk_llm::extract_json;

use crate::error::RemoteError;
use crate::report::{
    AnalyticsReport, InsightSource, Provenance, RiskFlag, SentimentSplit, Severity,
};

const MAX_TRENDS: usize = 4;

/// Rounded percentages may drift this far from 100 before the reply is rejected.
const SENTIMENT_SUM_TOLERANCE: f64 = 2.0;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireReport {
    sentiment: WireSentiment,
    trends: Vec<String>,
    risk_flags: Vec<WireRiskFlag>,
    recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireSentiment {
    overall: String,
    positive: f64,
    neutral: f64,
    negative: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRiskFlag {
    ticket_id: String,
    reason: String,
    severity: String,
}

/// Parse and validate a raw LLM reply into a remote-tagged report.
pub fn parse_remote_report(
    raw: &str,
    tickets: &[Ticket],
    model: &str,
) -> Result<AnalyticsReport, RemoteError> {
    let json_str = extract_json(raw);
    let wire: WireReport =
        serde_json::from_str(json_str).map_err(|e| RemoteError::InvalidJson {
            reason: e.to_string(),
            raw_response: raw.to_string(),
        })?;

    let known: HashSet<&str> = tickets.iter().map(|t| t.id.as_str()).collect();

    let sentiment = validate_sentiment(wire.sentiment)?;
    let risk_flags = wire
        .risk_flags
        .into_iter()
        .map(|f| validate_flag(f, &known))
        .collect::<Result<Vec<_>, _>>()?;

    let mut trends = wire.trends;
    trends.truncate(MAX_TRENDS);

    Ok(AnalyticsReport {
        sentiment,
        trends,
        risk_flags,
        recommendations: wire.recommendations,
        provenance: Provenance {
            source: InsightSource::Remote,
            note: Some(format!("Insights generated with {model}.")),
        },
    })
}

fn validate_sentiment(wire: WireSentiment) -> Result<SentimentSplit, RemoteError> {
    if wire.overall.trim().is_empty() {
        return Err(RemoteError::InvalidShape("sentiment.overall is empty".into()));
    }

    for (name, value) in [
        ("positive", wire.positive),
        ("neutral", wire.neutral),
        ("negative", wire.negative),
    ] {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(RemoteError::InvalidShape(format!(
                "sentiment.{name} out of range: {value}"
            )));
        }
    }

    let sum = wire.positive + wire.neutral + wire.negative;
    if (sum - 100.0).abs() > SENTIMENT_SUM_TOLERANCE {
        return Err(RemoteError::InvalidShape(format!(
            "sentiment percentages sum to {sum}, expected 100"
        )));
    }

    // Same closure rule as the heuristic split: negative absorbs rounding.
    let positive = wire.positive.round() as i64;
    let neutral = (wire.neutral.round() as i64).clamp(0, 100 - positive);
    let negative = 100 - positive - neutral;

    Ok(SentimentSplit {
        overall: wire.overall.trim().to_string(),
        positive: positive as u8,
        neutral: neutral as u8,
        negative: negative as u8,
    })
}

fn validate_flag(wire: WireRiskFlag, known: &HashSet<&str>) -> Result<RiskFlag, RemoteError> {
    let severity = Severity::parse(&wire.severity).ok_or_else(|| {
        RemoteError::InvalidShape(format!("unknown severity '{}'", wire.severity))
    })?;
    if !known.contains(wire.ticket_id.as_str()) {
        return Err(RemoteError::InvalidShape(format!(
            "risk flag for unknown ticket '{}'",
            wire.ticket_id
        )));
    }
    Ok(RiskFlag {
        ticket_id: wire.ticket_id,
        reason: wire.reason,
        severity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::dataset::sample_tickets;

    const VALID: &str = r#"{
        "sentiment": {"overall": "Mostly frustrated customers.", "positive": 20, "neutral": 45, "negative": 35},
        "trends": ["Billing", "Login", "Performance", "Search", "Email"],
        "riskFlags": [{"ticketId": "TK-008", "reason": "Double charge", "severity": "High"}],
        "recommendations": ["Refund TK-008 today"]
    }"#;

    fn parse(raw: &str) -> Result<AnalyticsReport, RemoteError> {
        parse_remote_report(raw, &sample_tickets(), "gemini-1.5-flash")
    }

    #[test]
    fn accepts_valid_reply() {
        let report = parse(VALID).unwrap();
        assert_eq!(report.source(), InsightSource::Remote);
        assert_eq!(
            report.provenance.note.as_deref(),
            Some("Insights generated with gemini-1.5-flash.")
        );
        assert_eq!(report.sentiment.total(), 100);
        assert_eq!(report.risk_flags[0].severity, Severity::High);
        assert_eq!(report.trends.len(), 4);
    }

    #[test]
    fn accepts_fenced_reply() {
        let fenced = format!("```json\n{VALID}\n```");
        assert!(parse(&fenced).is_ok());
    }

    #[test]
    fn closes_rounding_drift() {
        let raw = VALID.replace(r#""positive": 20, "neutral": 45, "negative": 35"#,
            r#""positive": 33.4, "neutral": 33.4, "negative": 33.4"#);
        let s = parse(&raw).unwrap().sentiment;
        assert_eq!((s.positive, s.neutral, s.negative), (33, 33, 34));
    }

    #[test]
    fn rejects_out_of_range_percentage() {
        let raw = VALID.replace(r#""negative": 35"#, r#""negative": 135"#);
        assert!(matches!(parse(&raw), Err(RemoteError::InvalidShape(_))));
    }

    #[test]
    fn rejects_sum_far_from_hundred() {
        let raw = VALID.replace(r#""negative": 35"#, r#""negative": 5"#);
        assert!(matches!(parse(&raw), Err(RemoteError::InvalidShape(_))));
    }

    #[test]
    fn rejects_unknown_severity() {
        let raw = VALID.replace(r#""severity": "High""#, r#""severity": "urgent""#);
        assert!(matches!(parse(&raw), Err(RemoteError::InvalidShape(_))));
    }

    #[test]
    fn rejects_unknown_ticket() {
        let raw = VALID.replace("\"ticketId\": \"TK-008\"", "\"ticketId\": \"TK-999\"");
        assert!(matches!(parse(&raw), Err(RemoteError::InvalidShape(_))));
    }

    #[test]
    fn rejects_missing_field() {
        let raw = r#"{"sentiment": {"overall": "x", "positive": 50, "neutral": 50, "negative": 0},
                      "trends": [], "riskFlags": []}"#;
        assert!(matches!(parse(raw), Err(RemoteError::InvalidJson { .. })));
    }

    #[test]
    fn rejects_prose() {
        assert!(matches!(
            parse("I'm sorry, I can't help with that."),
            Err(RemoteError::InvalidJson { .. })
        ));
    }

    #[test]
    fn rejects_string_percentages() {
        let raw = VALID.replace(r#""positive": 20"#, r#""positive": "20%""#);
        assert!(matches!(parse(&raw), Err(RemoteError::InvalidJson { .. })));
    }
}
