use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "AI study system landing page demo", long_about = None)]
pub struct Cli {
    /// RON configuration file (defaults to ./study_app.ron when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ingest files and watch the simulated processing progress
    Ingest {
        #[arg(required_unless_present = "interactive")]
        paths: Vec<PathBuf>,
        /// Treat the files as dropped: the picker's extension filter is not applied
        #[arg(long)]
        drop: bool,
        /// Keep running and read commands (`add`, `drop`, `rm`, `drag`, `leave`, `quit`) from stdin
        #[arg(long)]
        interactive: bool,
    },
    /// Write the composed landing page as HTML
    Page {
        #[arg(long, default_value = "landing.html")]
        out: PathBuf,
        /// Files to list in the upload widget snapshot
        #[arg(long = "with")]
        files: Vec<PathBuf>,
    },
    /// Print the default configuration as RON
    Config,
}
