//! CLI argument parsing and subcommand dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use helpdesk_core::{dataset, Config, HelpdeskError, Ticket};
use helpdesk_insights::{dashboard_stats, InsightOrchestrator};

use crate::render;

/// Support ticket dashboard with LLM-assisted insights.
#[derive(Parser, Debug)]
#[command(name = "helpdesk", version, about)]
pub struct Cli {
    /// JSON file with tickets (overrides TICKETS_PATH; sample set if neither is set).
    #[arg(long, global = true)]
    pub tickets: Option<PathBuf>,

    /// Skip the remote model even when GEMINI_API_KEY is set.
    #[arg(long, global = true)]
    pub heuristic_only: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API (default).
    Serve,
    /// Print the aggregate analytics report.
    Report {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Summarize one ticket, or every ticket when no id is given.
    Summary {
        id: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the dashboard header counts.
    Stats,
}

/// Everything a subcommand needs, resolved once from config and flags.
pub struct AppContext {
    pub config: Config,
    pub tickets: Vec<Ticket>,
    pub insights: InsightOrchestrator,
}

impl AppContext {
    pub fn build(mut config: Config, cli: &Cli) -> Result<Self> {
        if let Some(path) = &cli.tickets {
            config.data.tickets_path = Some(path.clone());
        }
        if cli.heuristic_only {
            config.llm.gemini_api_key = None;
        }

        let tickets = dataset::load_or_sample(config.data.tickets_path.as_deref())
            .context("failed to load tickets")?;
        let insights = InsightOrchestrator::from_config(&config.llm);
        info!(
            tickets = tickets.len(),
            remote = insights.is_remote_enabled(),
            "insights ready"
        );

        Ok(Self {
            config,
            tickets,
            insights,
        })
    }
}

/// Run a one-shot subcommand. `Serve` is handled by the caller.
pub async fn dispatch(ctx: &AppContext, command: &Command) -> Result<()> {
    match command {
        Command::Serve => unreachable!("serve is dispatched by main"),
        Command::Report { json } => {
            let report = ctx.insights.analytics_report(&ctx.tickets).await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::report(&report));
            }
        }
        Command::Summary { id: Some(id), json } => {
            let ticket = ctx
                .tickets
                .iter()
                .find(|t| &t.id == id)
                .ok_or_else(|| HelpdeskError::TicketNotFound(id.clone()))?;
            let summary = ctx.insights.quick_summary(ticket).await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", render::summary(&ticket.id, &summary));
            }
        }
        Command::Summary { id: None, json } => {
            let summaries = ctx.insights.quick_summaries(&ctx.tickets).await;
            if *json {
                let map: serde_json::Map<String, serde_json::Value> = summaries
                    .into_iter()
                    .map(|(id, s)| serde_json::to_value(s).map(|v| (id, v)))
                    .collect::<Result<_, serde_json::Error>>()?;
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (id, s) in &summaries {
                    println!("{}", render::summary(id, s));
                }
            }
        }
        Command::Stats => {
            print!("{}", render::stats(&dashboard_stats(&ctx.tickets)));
        }
    }
    Ok(())
}
