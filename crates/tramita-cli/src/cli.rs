//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tramita - harvest Brazilian legislative propositions into a canonical archive.
#[derive(Debug, Parser)]
#[command(name = "tramita")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ./tramita.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run raw records through the pipeline into the dataset and artifact stores
    Harvest(HarvestArgs),

    /// Fill missing derived-text artifacts for an already-written dataset
    Enrich(EnrichArgs),
}

/// Arguments for the harvest command.
#[derive(Debug, Parser)]
pub struct HarvestArgs {
    /// JSONL file of raw records, one per line
    pub input: PathBuf,

    /// Source slug for the output dataset name (defaults to the records' slug)
    #[arg(long)]
    pub slug: Option<String>,

    /// Inclusive start of the document-date range (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Inclusive end of the document-date range (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Cap on records processed this run
    #[arg(long)]
    pub limit: Option<usize>,

    /// Fetch original documents into the pdf/ store
    #[arg(long)]
    pub fetch_documents: bool,

    /// Extract text and classify subjects inline via the LLM
    #[arg(long)]
    pub enrich: bool,

    /// Generative Language API key (required with --enrich)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,
}

/// Arguments for the enrich command.
#[derive(Debug, Parser)]
pub struct EnrichArgs {
    /// Dataset file (.jl) produced by a harvest run
    pub dataset: PathBuf,

    /// Cap on text artifacts produced this run
    #[arg(long)]
    pub limit: Option<usize>,

    /// Generative Language API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_harvest() {
        let cli = Cli::parse_from([
            "tramita",
            "harvest",
            "raw.jl",
            "--limit",
            "10",
            "--start-date",
            "2024-01-01",
        ]);
        match cli.command {
            Command::Harvest(args) => {
                assert_eq!(args.input, PathBuf::from("raw.jl"));
                assert_eq!(args.limit, Some(10));
                assert_eq!(args.start_date.as_deref(), Some("2024-01-01"));
                assert!(!args.enrich);
            }
            _ => panic!("expected harvest"),
        }
    }

    #[test]
    fn test_parse_enrich() {
        let cli = Cli::parse_from(["tramita", "enrich", "output/x_proposicoes.jl"]);
        match cli.command {
            Command::Enrich(args) => {
                assert_eq!(args.dataset, PathBuf::from("output/x_proposicoes.jl"));
                assert_eq!(args.limit, None);
            }
            _ => panic!("expected enrich"),
        }
    }
}
