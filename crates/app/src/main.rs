//! papersync - reading-group server maintenance
//!
//! Main entry point for the command-line tool.

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use papersync_app::utils::logging::init_tracing;
use papersync_app::{AppContext, Cli};
use papersync_domain::RunReport;
use tracing::{debug, error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => debug!("No .env file"),
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    match execute(&cli).await {
        Ok(report) => {
            println!("{}", report.summary_line());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = format!("{err:#}");
            error!(error = %message, "papersync failed");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> anyhow::Result<RunReport> {
    let config = papersync_infra::config::load(cli.config.as_deref())
        .context("failed to load configuration")?;
    let app = AppContext::new(config).context("failed to initialise adapters")?;
    let report = papersync_app::run(&app, cli.mode()).await?;
    Ok(report)
}
