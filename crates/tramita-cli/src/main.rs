//! Tramita - harvest Brazilian legislative propositions into a canonical archive.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tramita_cli::{commands, Cli, Command, Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::Harvest(args) => {
            let summary = commands::execute_harvest(args, &config).await?;
            println!("Run summary: {}", summary);
        }
        Command::Enrich(args) => {
            let summary = commands::execute_enrich(args, &config).await?;
            println!("Run summary: {}", summary);
        }
    }

    Ok(())
}
