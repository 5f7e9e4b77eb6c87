mod cli;
mod inventory;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinrecon_core::{
    load_config, match_details, match_feed, parse_with, reconcile_all, validate_config, Config,
    Statistics,
};

use cli::{Cli, Commands, OutputFormat};
use inventory::{load_feed, ImportReport, Inventory, ScanReport};

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs on stderr, reports on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan { inventory, format } => scan(&config, &inventory, format),
        Commands::Import {
            inventory,
            feed,
            format,
        } => import(&config, &inventory, &feed, format),
        Commands::Match { name, file } => explain_match(&config, &name, &file),
    }
}

fn resolve_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(path).with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => {
            info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

fn scan(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    let inventory = Inventory::load(path)?;
    info!(
        "Loaded {} games and {} files",
        inventory.games.len(),
        inventory.files.len()
    );

    let outputs = reconcile_all(&inventory.games, &inventory.files, config)
        .context("Reconciliation failed")?;
    let statistics = Statistics::from_outputs(inventory.games.len(), &outputs);

    match format {
        OutputFormat::Text => print!("{}", statistics),
        OutputFormat::Json => {
            let report = ScanReport {
                statistics: &statistics,
                content: &outputs,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn import(config: &Config, inventory: &Path, feed: &Path, format: OutputFormat) -> Result<()> {
    let inventory = Inventory::load(inventory)?;
    let feed = load_feed(feed)?;

    let report = match_feed(&inventory.games, &feed, config);

    match format {
        OutputFormat::Text => {
            for m in &report.matches {
                println!(
                    "{} -> {} ({})",
                    feed[m.feed_index].name, inventory.games[m.local_index].name, m.score
                );
            }
            println!();
            println!("{}", report.statistics);
        }
        OutputFormat::Json => {
            let output = ImportReport::new(&report, &inventory.games, &feed);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn explain_match(config: &Config, name: &str, file: &str) -> Result<()> {
    let name_details = parse_with(name, &config.matching);
    let file_details = parse_with(file, &config.matching);
    let result = match_details(&file_details, &name_details, &config.matching);

    println!("name: {}", serde_json::to_string(&name_details)?);
    println!("file: {}", serde_json::to_string(&file_details)?);
    match result.tier {
        Some(tier) => println!("tier: {}", tier),
        None => println!("tier: none"),
    }
    println!("score: {}", result.score);
    println!("match: {}", result.success);
    Ok(())
}
