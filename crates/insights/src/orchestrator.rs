//! Remote-first insight generation with heuristic fallback.
//!
//! Per call: no provider → heuristic; provider → one remote attempt →
//! remote on success, heuristic on any failure. No retries.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, info, warn};

use helpdesk_core::config::LlmConfig;
use helpdesk_core::{Ticket, TicketId};
use helpdesk_llm::{LlmProvider, Message};

use crate::error::RemoteError;
use crate::heuristics::{heuristic_report, heuristic_summary};
use crate::prompts::{analytics_prompt, summary_prompt, SYSTEM_PROMPT};
use crate::report::{AnalyticsReport, InsightSource, SummaryResult};
use crate::validate::parse_remote_report;

const DEFAULT_TEMPERATURE: f32 = 0.4;
const DEFAULT_MAX_TOKENS: u32 = 2048;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Summaries only need a sentence.
const SUMMARY_MAX_TOKENS: u32 = 256;

/// Produces analytics reports and ticket summaries, preferring the injected
/// LLM provider and falling back to local heuristics.
pub struct InsightOrchestrator {
    provider: Option<Arc<dyn LlmProvider>>,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl InsightOrchestrator {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            provider,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Never calls out; every result is heuristic.
    pub fn heuristic_only() -> Self {
        Self::new(None)
    }

    /// Build from config, creating the provider only when a key is set.
    pub fn from_config(llm_config: &LlmConfig) -> Self {
        Self::new(helpdesk_llm::create_provider(llm_config))
            .with_generation(llm_config.temperature, llm_config.max_tokens)
            .with_timeout(Duration::from_secs(llm_config.timeout_secs))
    }

    pub fn with_generation(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Model name of the injected provider, if any.
    pub fn model_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.model_name())
    }

    /// Aggregate analytics for `tickets`. Always returns a report.
    pub async fn analytics_report(&self, tickets: &[Ticket]) -> AnalyticsReport {
        let Some(provider) = self.provider.as_deref() else {
            debug!(tickets = tickets.len(), "no LLM provider, using heuristic analytics");
            return heuristic_report(tickets);
        };

        match self.remote_report(provider, tickets).await {
            Ok(report) => {
                info!(
                    model = provider.model_name(),
                    risk_flags = report.risk_flags.len(),
                    "remote analytics report generated"
                );
                report
            }
            Err(e) => {
                warn!(error = %e, "remote analytics failed, falling back to heuristics");
                if let RemoteError::InvalidJson { raw_response, .. } = &e {
                    debug!("raw LLM response: {raw_response}");
                }
                heuristic_report(tickets)
            }
        }
    }

    /// One-sentence summary of `ticket`. Always returns a summary.
    pub async fn quick_summary(&self, ticket: &Ticket) -> SummaryResult {
        let Some(provider) = self.provider.as_deref() else {
            return heuristic_summary(ticket);
        };

        match self.remote_summary(provider, ticket).await {
            Ok(text) => SummaryResult {
                text,
                source: InsightSource::Remote,
            },
            Err(e) => {
                warn!(
                    ticket = %ticket.id,
                    error = %e,
                    "remote summary failed, falling back to heuristics"
                );
                heuristic_summary(ticket)
            }
        }
    }

    /// Summaries for every ticket, requested concurrently, in input order.
    pub async fn quick_summaries(&self, tickets: &[Ticket]) -> Vec<(TicketId, SummaryResult)> {
        let results = join_all(tickets.iter().map(|t| self.quick_summary(t))).await;
        tickets.iter().map(|t| t.id.clone()).zip(results).collect()
    }

    async fn remote_report(
        &self,
        provider: &dyn LlmProvider,
        tickets: &[Ticket],
    ) -> Result<AnalyticsReport, RemoteError> {
        info!(tickets = tickets.len(), "requesting remote analytics");
        let messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(analytics_prompt(tickets)),
        ];
        let response = self.call(provider, messages, self.max_tokens).await?;
        debug!("LLM analytics response: {response}");
        parse_remote_report(&response, tickets, provider.model_name())
    }

    async fn remote_summary(
        &self,
        provider: &dyn LlmProvider,
        ticket: &Ticket,
    ) -> Result<String, RemoteError> {
        let messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(summary_prompt(ticket)),
        ];
        let max_tokens = self.max_tokens.min(SUMMARY_MAX_TOKENS);
        let text = self.call(provider, messages, max_tokens).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(RemoteError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    /// Single bounded provider call.
    async fn call(
        &self,
        provider: &dyn LlmProvider,
        messages: Vec<Message>,
        max_tokens: u32,
    ) -> Result<String, RemoteError> {
        tokio::time::timeout(
            self.timeout,
            provider.complete(messages, self.temperature, max_tokens),
        )
        .await
        .map_err(|_| RemoteError::Timeout(self.timeout))?
        .map_err(RemoteError::from)
    }
}
