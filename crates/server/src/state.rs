use std::sync::Arc;

use helpdesk_core::{Config, Ticket};
use helpdesk_insights::InsightOrchestrator;

/// Shared, read-only application state. Tickets never change after startup.
pub struct AppState {
    pub config: Config,
    pub tickets: Vec<Ticket>,
    pub insights: InsightOrchestrator,
}

impl AppState {
    pub fn new(config: Config, tickets: Vec<Ticket>, insights: InsightOrchestrator) -> Arc<Self> {
        Arc::new(Self {
            config,
            tickets,
            insights,
        })
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }
}
