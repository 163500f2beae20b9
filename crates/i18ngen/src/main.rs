//! Main entry point for i18ngen.

use anyhow::Result;
use clap::Parser;
use i18ngen::{generator, Cli, Command};
use i18ngen_common::{init_logging, LoggingConfig};
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        level: cli.log_level.clone(),
        json_format: cli.log_json,
        ..LoggingConfig::default()
    })?;

    match cli.command {
        Command::Generate(args) => {
            let config = generator::load_config(&args)?;
            match generator::run(&config) {
                Ok(written) => {
                    for path in &written {
                        info!(path = %path.display(), "Generated");
                    }
                    Ok(())
                }
                Err(e) => {
                    error!("Generation failed: {e:#}");
                    Err(e)
                }
            }
        }
    }
}
