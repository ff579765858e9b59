//! `license-ledger`: list every license declared across an installed Node
//! dependency tree.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load and validate configuration ([`config::load_config`]).
//! 3. Resolve the installed dependency tree ([`resolver`]).
//! 4. Walk it, collecting license sources per package ([`walker`]).
//! 5. Render the standard or CSV report ([`report`]).

mod cli;
mod compare;
mod config;
mod error;
mod finder;
mod license;
mod models;
mod report;
mod resolver;
mod walker;

#[cfg(test)]
mod test_support;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{load_config, OutputFormat};
use license::identify::LicenseIdentifier;
use resolver::node::NodeResolver;
use walker::Walker;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("license_ledger=debug")
    } else {
        EnvFilter::new("license_ledger=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = load_config(&cli.path, cli.config.as_deref())?;
    let options = config.into_options(&cli.path, cli.overrides())?;
    let identifier = Arc::new(LicenseIdentifier::new(options.identify.clone())?);

    let spinner = if cli.quiet || options.format == OutputFormat::Csv {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Scanning {}", options.directory.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let walker = Walker::new(NodeResolver::new(), identifier);
    let result = runtime.block_on(walker.walk(&options.directory, &options.walk));

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let walk = result?;

    tracing::debug!(
        packages = walk.packages.len(),
        diagnostics = walk.diagnostics.len(),
        "walk finished"
    );

    let output = report::render(&walk.packages, options.format, options.summary)?;
    print!("{output}");

    Ok(())
}
