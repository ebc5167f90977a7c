//! Init command - write a sample event_config.json

use anyhow::Result;
use colored::Colorize;
use eventpage_core::ConfigStore;
use std::path::{Path, PathBuf};

pub fn run(config: PathBuf, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} Creating sample config at {}", "→".cyan(), config.display());
    }

    ConfigStore::new(&config).create_sample()?;
    print_sample_created(&config);

    Ok(())
}

/// Status message shared with `customize` when it bootstraps
pub fn print_sample_created(path: &Path) {
    println!(
        "{} Configuration file created: {}",
        "✓".green().bold(),
        path.display()
    );
    println!(
        "\n{} Edit this file with your event data and run eventpage again.",
        "→".cyan()
    );
}
