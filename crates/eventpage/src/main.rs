mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        None => commands::customize::run(cli.customize, cli.verbose),
        Some(Commands::Customize(args)) => commands::customize::run(args, cli.verbose),
        Some(Commands::Init { config }) => commands::init::run(config, cli.verbose),
        Some(Commands::Check { config, json }) => commands::check::run(config, json, cli.verbose),
        Some(Commands::Rules { json }) => commands::rules::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
