//! Orchestration of the fetch, analyze and samples runs.

use crate::cli::Command;
use crate::error::CliResult;
use shootings_config::Config;
use shootings_data::{
    summarize, ColumnSummary, DataFetcher, FetchReport, TableLoader, WeeklyAggregator, WeeklyCounts,
};
use shootings_graphs::{render_samples, FigureRenderer};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Result of loading and aggregating the shootings CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Unique values of the summary columns
    pub summaries: Vec<ColumnSummary>,
    /// Shootings per window
    pub weekly: WeeklyCounts,
}

/// The application, holding its configuration.
#[derive(Debug, Clone)]
pub struct App {
    config: Config,
}

impl App {
    /// Create the application from a validated configuration
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a subcommand to completion.
    pub async fn run(&self, command: Command) -> CliResult<()> {
        info!("Running {command:?}");
        match command {
            Command::Fetch => {
                self.fetch().await?;
            }
            Command::Analyze => {
                self.analyze(&mut std::io::stdout().lock())?;
            }
            Command::Samples => {
                self.samples()?;
            }
            Command::All => {
                self.fetch().await?;
                self.analyze(&mut std::io::stdout().lock())?;
            }
        }
        Ok(())
    }

    /// Downloads every configured dataset.
    pub async fn fetch(&self) -> CliResult<Vec<FetchReport>> {
        let fetcher = DataFetcher::new(&self.config.sources)?;
        Ok(fetcher.fetch_all(&self.config.sources.datasets).await?)
    }

    /// Loads the CSV, writes the column summaries to `out` and aggregates
    /// the event dates.
    #[instrument(skip(self, out))]
    pub fn load_and_summarize<W: Write>(&self, out: &mut W) -> CliResult<Analysis> {
        let path = self.config.shootings_path();
        let frame = TableLoader::shootings().load_path(&path)?;

        let summaries = summarize(&frame, &self.config.analysis.summary_columns)?;
        for summary in &summaries {
            writeln!(out, "{summary}")?;
        }

        let aggregator = WeeklyAggregator::with_window_days(self.config.analysis.window_days)?;
        let weekly = aggregator.aggregate_column(&frame, &self.config.analysis.date_column)?;

        Ok(Analysis { summaries, weekly })
    }

    /// Summarises the CSV and renders the weekly histogram and line chart.
    pub fn analyze<W: Write>(&self, out: &mut W) -> CliResult<Vec<PathBuf>> {
        let analysis = self.load_and_summarize(out)?;
        let renderer = FigureRenderer::new(&self.config.figures)?;

        let start = analysis.weekly.start();
        let written = vec![
            renderer.weekly_histogram(&analysis.weekly.values(), start)?,
            renderer.weekly_line(&analysis.weekly.points(), start)?,
        ];
        Ok(written)
    }

    /// Renders the sample figures.
    pub fn samples(&self) -> CliResult<Vec<PathBuf>> {
        let renderer = FigureRenderer::new(&self.config.figures)?;
        Ok(render_samples(&renderer, &self.config.figures)?)
    }
}
