//! fragcut
//!
//! Cut a piece out of a video without re-encoding.
//!
//! # Usage
//!
//! ```bash
//! fragcut                      # interactive session
//! fragcut clip -i "movie.mkv" -s 1:00 -e 2:30 --audio 0
//! fragcut inspect -i "movie.mkv" --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use fragcut::app::DefaultAppContainer;
use fragcut::cli::{commands, Cli, Commands};
use fragcut::config_initialization::initialize_configuration_hierarchy;
use fragcut::utils::logging::LoggingSystem;

/// Main entry point for fragcut
fn main() -> Result<()> {
    let cli = Cli::parse();

    let resolved = initialize_configuration_hierarchy(&cli)?;
    LoggingSystem::new(resolved.config.logging_config()?).initialize()?;

    match &resolved.file {
        Some(path) => info!(path = %path.display(), "Loaded configuration file"),
        None => debug!("No configuration file found, using defaults"),
    }
    if resolved.env_overrides > 0 {
        info!(count = resolved.env_overrides, "Applied environment overrides");
    }

    let container = DefaultAppContainer::new(&resolved.config, cli.dry_run);

    match cli.command {
        None => commands::interactive(&container)?,
        Some(Commands::Clip(args)) => commands::clip(args, &container)?,
        Some(Commands::Inspect(args)) => commands::inspect(args, &container)?,
    }

    Ok(())
}
