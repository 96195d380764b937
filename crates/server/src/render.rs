//! Plain-text rendering for the one-shot CLI commands.

use std::fmt::Write;

use helpdesk_insights::{AnalyticsReport, DashboardStats, InsightSource, SummaryResult};

fn badge(source: InsightSource) -> &'static str {
    match source {
        InsightSource::Remote => "[AI]",
        InsightSource::Heuristic => "[heuristic]",
    }
}

pub fn report(report: &AnalyticsReport) -> String {
    let mut out = String::new();
    let s = &report.sentiment;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Sentiment {}", badge(report.source()));
    let _ = writeln!(out, "  {}", s.overall);
    let _ = writeln!(
        out,
        "  positive {}%  neutral {}%  negative {}%",
        s.positive, s.neutral, s.negative
    );

    let _ = writeln!(out, "\nTrends");
    for trend in &report.trends {
        let _ = writeln!(out, "  - {trend}");
    }

    let _ = writeln!(out, "\nRisk flags");
    if report.risk_flags.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for flag in &report.risk_flags {
        let _ = writeln!(
            out,
            "  {} [{:?}] {}",
            flag.ticket_id, flag.severity, flag.reason
        );
    }

    let _ = writeln!(out, "\nRecommendations");
    for (i, rec) in report.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {rec}", i + 1);
    }

    if let Some(note) = &report.provenance.note {
        let _ = writeln!(out, "\n{note}");
    }
    out
}

pub fn summary(ticket_id: &str, summary: &SummaryResult) -> String {
    format!("{ticket_id} {} {}", badge(summary.source), summary.text)
}

pub fn stats(stats: &DashboardStats) -> String {
    format!(
        "Total tickets:     {}\nOpen tickets:      {}\nEscalated tickets: {}\nCritical tickets:  {}\n",
        stats.total, stats.open, stats.escalated, stats.critical
    )
}
