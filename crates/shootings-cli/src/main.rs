//! Police shootings explorer - Main Entry Point

use anyhow::Result;
use clap::Parser;
use shootings_cli::{App, Args};
use shootings_common::init_logging;
use shootings_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = ConfigLoader::load(args.config.as_deref())?;

    // Initialize logging
    let mut logging = config.logging.clone();
    if let Some(level) = &args.log_level {
        logging.level.clone_from(level);
    }
    init_logging(&logging)?;

    info!(
        "Configuration loaded: {} datasets, figures in {}",
        config.sources.datasets.len(),
        config.figures.output_dir.display()
    );

    let app = App::new(config);
    if let Err(e) = app.run(args.subcommand()).await {
        error!("Run failed: {e}");
        return Err(e.into());
    }

    info!("Done");
    Ok(())
}
