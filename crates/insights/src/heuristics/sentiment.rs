use helpdesk_core::{Ticket, TicketStatus};

use super::percent;
use crate::report::SentimentSplit;

const NEGATIVE_THRESHOLD: i64 = 40;
const POSITIVE_THRESHOLD: i64 = 40;

const OVERALL_NEGATIVE: &str = "Customer sentiment is trending negative due to several \
     critical or escalated issues awaiting action.";
const OVERALL_POSITIVE: &str = "Customer sentiment is cautiously positive thanks to the \
     steady resolution of support requests.";
const OVERALL_STABLE: &str = "Customer sentiment is stable with a balanced mix of open \
     and resolved conversations.";

/// Positive = resolved, negative = critical or escalated, neutral = the rest.
///
/// A ticket can count as both positive and negative (a resolved critical);
/// the neutral bucket absorbs the overlap and is clamped at zero.
pub fn sentiment_split(tickets: &[Ticket]) -> SentimentSplit {
    let total = tickets.len().max(1) as i64;
    let negative_count = tickets.iter().filter(|t| t.is_at_risk()).count() as i64;
    let positive_count = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Resolved)
        .count() as i64;
    let neutral_count = total - negative_count - positive_count;

    let positive = percent(positive_count as f64, total as f64).clamp(0, 100);
    let neutral = percent(neutral_count as f64, total as f64).clamp(0, 100 - positive);
    let negative = 100 - positive - neutral;

    let overall = if negative >= NEGATIVE_THRESHOLD {
        OVERALL_NEGATIVE
    } else if positive >= POSITIVE_THRESHOLD {
        OVERALL_POSITIVE
    } else {
        OVERALL_STABLE
    };

    SentimentSplit {
        overall: overall.to_string(),
        positive: positive as u8,
        neutral: neutral as u8,
        negative: negative as u8,
    }
}
