use anyhow::Result;
use clap::Parser;
use gym_membership_pricing::prelude::*;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod shell;

use config::{config_path, expand_path, load_config, ShellConfig};
use shell::Shell;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// JSON catalog of plans and features
    #[arg(short = 'c', long = "catalog")]
    catalog: Option<String>,

    #[arg(long = "config")]
    config: Option<String>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(raw) => CatalogLoader::new().load_from_file(expand_path(raw)),
        None => Ok(Catalog::standard()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_file = config_path(args.config.as_deref());
    let config_result = load_config(&config_file);
    let config = config_result.as_ref().ok();

    init_logging(args.verbose || config.is_some_and(|c| c.verbose));

    let config = match config_result {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring config {}: {:#}", config_file.display(), e);
            ShellConfig::default()
        }
    };

    let catalog_path = args.catalog.or(config.catalog);
    let catalog = load_catalog(catalog_path.as_deref())?;
    let manager = MembershipManager::new(Arc::new(catalog));

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut shell = Shell::new(manager, io::stdin().lock(), stdout.lock()).with_color(color);

    let total = shell.run()?;
    tracing::debug!(total, "session finished");

    Ok(())
}
