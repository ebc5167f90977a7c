//! Check command - validate the config document only

use crate::output::print_json;
use anyhow::{Result, anyhow};
use colored::Colorize;
use eventpage_core::{ConfigStore, EventpageError, SocialPlatform};
use std::path::PathBuf;

pub fn run(config: PathBuf, json: bool, verbose: bool) -> Result<()> {
    let store = ConfigStore::new(&config);

    let event = store.load().map_err(|e| match e {
        EventpageError::NotFound { .. } => {
            anyhow!("{} (run `eventpage init` to create a sample)", e)
        }
        other => other.into(),
    })?;

    if json {
        return print_json(&event);
    }

    println!(
        "{} {} is valid (event: {})",
        "✓".green().bold(),
        config.display(),
        event.event_name
    );

    if verbose {
        println!("  Banner: {}", event.banner());
        println!("  Deck: {}", event.deck_pdf_or_default());
        for platform in SocialPlatform::ALL {
            println!(
                "  {}: {}",
                platform,
                event.social_link(platform).unwrap_or("(default kept)")
            );
        }
        if !event.extra.is_empty() {
            let keys: Vec<&str> = event.extra.keys().map(String::as_str).collect();
            println!("  Ignored keys: {}", keys.join(", "));
        }
    }

    Ok(())
}
