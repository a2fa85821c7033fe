pub mod app;
pub mod cli;
mod commands;
pub mod config;
pub mod effects;
pub mod intake;
pub mod logging;
pub mod toast;
pub mod ui;

use anyhow::Context;
use study_logging::study_info;

use self::cli::{Cli, Command};
use self::intake::IntakeMode;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = config::load_config(cli.config.as_deref()).context("loading configuration")?;
    let config = loaded.config;
    logging::initialize(
        config.log_destination,
        config.level_filter()?,
        &config.log_file,
    );
    match &loaded.source {
        config::ConfigSource::File(path) => study_info!("Loaded configuration from {:?}", path),
        config::ConfigSource::Defaults => study_info!("No configuration file, using defaults"),
    }

    match cli.command {
        Command::Ingest {
            paths,
            drop,
            interactive,
        } => {
            let mode = if drop {
                IntakeMode::Drop
            } else {
                IntakeMode::Picker
            };
            app::run_ingest(
                &config,
                app::IngestRequest {
                    paths,
                    mode,
                    interactive,
                },
            )
        }
        Command::Page { out, files } => app::write_page(&config, &out, &files),
        Command::Config => {
            println!("{}", config::to_ron(&config::AppConfig::default())?);
            Ok(())
        }
    }
}
