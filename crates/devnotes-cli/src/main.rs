//! dev-notes — MCP server for markdown notes and weather lookups.
//!
//! Speaks MCP over stdin/stdout. Notes live in `~/dev-notes/`. The only
//! output outside the protocol is one diagnostic line on stderr.

use anyhow::Context;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devnotes_core::Config;
use devnotes_mcp::DevNotesService;

#[derive(Parser)]
#[command(name = "dev-notes")]
#[command(version)]
#[command(about = "MCP server that saves, lists, and reads notes in ~/dev-notes/ and fetches weather")]
struct Cli {}

fn init_tracing() {
    // stdout carries the protocol. Only this binary's startup line is INFO;
    // library chatter (rmcp handshake, transport shutdown) is capped at WARN.
    let filter = Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target(env!("CARGO_CRATE_NAME"), LevelFilter::INFO);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = Config::from_home().context("failed to resolve notes directory")?;
    let service = DevNotesService::new(&config);
    service
        .store()
        .ensure_store()
        .await
        .context("failed to prepare notes directory")?;

    let running = service
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    tracing::info!("Dev Notes MCP server is running.");

    running
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
