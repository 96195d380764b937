mod api;
mod cli;
mod render;
mod router;
mod state;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::cli::{AppContext, Cli, Command};
use crate::state::AppState;

fn load_config() -> helpdesk_core::Config {
    helpdesk_core::config::load_dotenv();
    helpdesk_core::Config::from_env()
}

async fn serve(ctx: AppContext) -> anyhow::Result<()> {
    let addr = ctx.config.server.bind_addr();
    let port = ctx.config.server.port;
    let state = AppState::new(ctx.config, ctx.tickets, ctx.insights);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://localhost:{}", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config();
    config.log_summary();

    let ctx = AppContext::build(config, &cli)?;
    match cli.command.as_ref().unwrap_or(&Command::Serve) {
        Command::Serve => serve(ctx).await,
        command => cli::dispatch(&ctx, command).await,
    }
}
