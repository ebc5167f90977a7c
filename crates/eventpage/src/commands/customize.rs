//! Customize command - rewrite the page for one event

use crate::cli::CustomizeArgs;
use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use eventpage_core::template::{Outcome, RuleReport};
use eventpage_core::{Bootstrap, ConfigStore, EventConfig, SubstitutionReport, TemplateSubstitutor};
use serde_json::json;
use std::path::Path;

/// Customize the page, or bootstrap a sample config when none exists
///
/// # Arguments
///
/// * `args` - Config/artifact paths and run mode
/// * `verbose` - Print one line per rule if true
pub fn run(args: CustomizeArgs, verbose: bool) -> Result<()> {
    let store = ConfigStore::new(&args.config);

    let config = match store.load_or_create_sample()? {
        Bootstrap::SampleCreated(path) => {
            crate::commands::init::print_sample_created(&path);
            return Ok(());
        }
        Bootstrap::Loaded(config) => config,
    };

    if verbose {
        println!(
            "{} Customizing {} for '{}'",
            "→".cyan(),
            args.artifact.display(),
            config.event_name
        );
    }

    let substitutor = TemplateSubstitutor::default();
    let report = if args.dry_run {
        substitutor.preview(&args.artifact, &config)?
    } else {
        substitutor.apply(&args.artifact, &config)?
    };

    if args.json {
        print_json(&json!({
            "event": config.event_name,
            "artifact": args.artifact,
            "dryRun": args.dry_run,
            "rules": report,
        }))?;
    } else {
        print_summary(&config, &report, &args.artifact, args.dry_run, verbose);
    }

    if args.strict && !report.is_complete() {
        let missing: Vec<String> = report.not_found().map(|e| e.rule_id.to_string()).collect();
        bail!(
            "{} required anchor(s) not found in {}: {}",
            missing.len(),
            args.artifact.display(),
            missing.join(", ")
        );
    }

    Ok(())
}

fn print_summary(
    config: &EventConfig,
    report: &SubstitutionReport,
    artifact: &Path,
    dry_run: bool,
    verbose: bool,
) {
    if dry_run {
        println!(
            "{} Dry run: no changes written to {}",
            "!".yellow(),
            artifact.display()
        );
    } else {
        println!(
            "{} Website customized for: {}",
            "✓".green().bold(),
            config.event_name
        );
    }

    println!(
        "  PDF deck: {}",
        config.deck_pdf.as_deref().unwrap_or("Not configured")
    );
    println!(
        "  Profile image: {}",
        if config.linkedin_profile_image.is_some() {
            "Configured"
        } else {
            "Not configured"
        }
    );

    if verbose {
        println!("\n{} Rules:", "→".cyan());
        for entry in report.entries() {
            print_rule(entry);
        }
    }

    let not_found: Vec<String> = report.not_found().map(|e| e.rule_id.to_string()).collect();
    if !not_found.is_empty() {
        println!(
            "\n{} {} required anchor(s) not found (page may already be customized): {}",
            "!".yellow(),
            not_found.len(),
            not_found.join(", ")
        );
    }
}

fn print_rule(entry: &RuleReport) {
    match entry.outcome {
        Outcome::Applied => println!(
            "  {} {} ({} replaced)",
            "✓".green(),
            entry.rule_id,
            entry.occurrence_count
        ),
        Outcome::Skipped => println!("  {} {} (skipped)", "-".dimmed(), entry.rule_id),
        Outcome::NotFound => println!("  {} {} (not found)", "!".yellow(), entry.rule_id),
    }
}
