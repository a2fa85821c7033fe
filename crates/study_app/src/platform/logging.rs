//! Logger setup for `study_app`.
//!
//! Progress rows and toasts own stdout, so terminal logging goes to stderr and
//! the default is the `study_app.log` file named in the RON config. Simulator
//! ticks log at trace level; ingest batches, notifications and shutdown at info.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Where log records go, chosen by `log_destination` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    #[default]
    File,
    /// stderr only; interleaves with the progress rows.
    Terminal,
    Both,
}

impl LogDestination {
    pub fn to_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    pub fn to_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

/// Installs the global logger. A log file that cannot be created is reported
/// on stderr and skipped; the run continues with whatever loggers remain.
pub fn initialize(destination: LogDestination, level: LevelFilter, log_file: &Path) {
    let config = record_format();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.to_file() {
        match File::create(log_file) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: cannot write log file {:?}: {}", log_file, err),
        }
    }

    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

/// RFC 3339 timestamps; the module path is only printed for errors.
fn record_format() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
