//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch the police shootings dataset and render exploratory figures.
#[derive(Parser, Debug)]
#[command(name = "shootings", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (YAML or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter, overrides the configured level
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// What to run; defaults to `all`
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// The subcommand to run.
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Download every configured dataset
    Fetch,
    /// Summarise the CSV and render the weekly figures
    Analyze,
    /// Render the sample bubble, block, bar and heatmap figures
    Samples,
    /// Fetch, then analyze
    #[default]
    All,
}
