//! Budgetwise CLI - Personal budget planner
//!
//! Usage:
//!   budgetwise serve --port 5000          Start the API server
//!   budgetwise analyze -i 5000 -e food=800  Analyze a budget locally
//!   budgetwise dashboard --suggest        Show the dashboard with suggestions
//!   budgetwise tips                       Show budgeting tips

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve { port, host } => commands::cmd_serve(config_path, &host, port).await,
        Commands::Analyze {
            income,
            expenses,
            json,
        } => commands::cmd_analyze(config_path, income, &expenses, json),
        Commands::Dashboard(args) => commands::cmd_dashboard(config_path, &args).await,
        Commands::Tips => commands::cmd_tips(),
        Commands::Health { api_url } => commands::cmd_health(&api_url).await,
    }
}
