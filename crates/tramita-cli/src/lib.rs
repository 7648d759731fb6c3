//! Tramita CLI - operate the legislative proposition harvest pipeline.
//!
//! Two subcommands cover the pipeline's two passes:
//!
//! - `harvest`: run raw records through validation, normalization and the
//!   artifact writers, producing a per-run JSONL dataset
//! - `enrich`: walk an existing dataset and fill missing derived-text
//!   artifacts via the LLM capability
//!
//! Configuration errors (bad dates, zero limit, missing credential) are
//! fatal and reported before any file or network activity; per-record
//! problems only show up in the run summary.

#![warn(missing_docs)]

pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command, EnrichArgs, HarvestArgs};
pub use collector::FixtureCollector;
pub use config::Config;
pub use error::{CliError, Result};
