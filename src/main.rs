//! Birthday MCP Server - Main Entry Point
//!
//! This is the main entry point for the birthday MCP server application.
//! The actual implementation is in the `birthday_mcp` library.

use anyhow::{Context, Result};
use birthday_mcp::BirthdayServerHandler;
use birthday_mcp::birthday::local_date_today;
use chrono::NaiveDate;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Birthday MCP Server - family birthday agenda via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a roster TOML file (defaults to the built-in family roster)
    #[arg(long)]
    roster: Option<String>,

    /// Reference date in YYYY-MM-DD format (defaults to today)
    #[arg(long)]
    today: Option<String>,

    /// Print the page once and exit instead of serving
    #[arg(long)]
    print: bool,

    /// Log level written to stderr
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP stream, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let today = match args.today {
        Some(ref date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").with_context(|| {
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            )
        })?,
        None => local_date_today(),
    };

    let handler = BirthdayServerHandler::new(args.roster.as_deref(), today)?;

    if args.print {
        print!("{}", handler.render_page());
        return Ok(());
    }

    info!("Birthday MCP server starting on stdio");
    serve_stdio(handler).await?;
    Ok(())
}
