//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use eventpage_core::config::consts::paths::{DEFAULT_ARTIFACT_PATH, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eventpage")]
#[command(
    version,
    about = "Customize the event landing page from event_config.json",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `customize` command
    #[command(flatten)]
    pub customize: CustomizeArgs,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Customize the page (default when no subcommand is given)
    Customize(CustomizeArgs),

    /// Create a sample event_config.json
    Init {
        /// Where to write the sample
        #[arg(long, env = "EVENTPAGE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Validate event_config.json without touching the page
    Check {
        #[arg(long, env = "EVENTPAGE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Output the validated document as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the anchors the page is expected to contain
    Rules {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct CustomizeArgs {
    /// Event configuration document; a sample is created if missing
    #[arg(long, env = "EVENTPAGE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// HTML page to customize in place
    #[arg(long, env = "EVENTPAGE_ARTIFACT", default_value = DEFAULT_ARTIFACT_PATH)]
    pub artifact: PathBuf,

    /// Report what would change without writing the page
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if any required anchor is missing from the page
    #[arg(long)]
    pub strict: bool,

    /// Output the substitution report as JSON
    #[arg(long)]
    pub json: bool,
}
