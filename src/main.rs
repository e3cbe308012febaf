//! URL Runner main entry point
//!
//! This is the command-line interface for the URL Runner prober.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url_runner::config::{compute_config_hash, load_config, Config};
use url_runner::output::{print_summary, LogReporter};
use url_runner::runner::{IterationOutcome, Runner};
use url_runner::server;

/// URL Runner: a continuous JSON reachability prober
///
/// URL Runner repeatedly pulls a list of URLs and checks whether each one
/// serves JSON, first directly and then through a relay.
#[derive(Parser, Debug)]
#[command(name = "url-runner")]
#[command(version = "1.0.0")]
#[command(about = "A continuous JSON reachability prober", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Fetch and print the current URL list without probing
    #[arg(long, conflicts_with = "once")]
    dry_run: bool,

    /// Run a single pass, print its summary and exit
    #[arg(long, conflicts_with = "dry_run")]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(path) = &cli.config {
        let hash = compute_config_hash(path)?;
        tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            hash
        );
    }

    let runner = Runner::new(&config, Arc::new(LogReporter::new()))
        .context("Failed to initialize runner")?;

    if cli.dry_run {
        handle_dry_run(&config, &runner).await
    } else if cli.once {
        handle_once(&runner).await
    } else {
        handle_run(&config, runner).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("url_runner=info,warn"),
            1 => EnvFilter::new("url_runner=debug,info"),
            2 => EnvFilter::new("url_runner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the configuration and the current list
async fn handle_dry_run(config: &Config, runner: &Runner) -> anyhow::Result<()> {
    println!("=== URL Runner Dry Run ===\n");

    println!("Source: {}", config.source.url);
    println!("Relay: {}", config.relay.base_url);
    println!(
        "Probe: {} workers, {}s timeout, User-Agent '{}'",
        config.probe.workers, config.probe.timeout_secs, config.probe.user_agent
    );
    println!("Liveness port: {}", config.server.port);
    println!();

    let urls = runner.fetch_list().await?;
    println!("URL list ({}):", urls.len());
    for url in &urls {
        println!("  - {}", url);
    }

    Ok(())
}

/// Handles the --once mode: one iteration, then a summary
async fn handle_once(runner: &Runner) -> anyhow::Result<()> {
    match runner.run_iteration().await? {
        IterationOutcome::EmptyList => {
            println!("URL list at {} is empty", runner.source_url());
        }
        IterationOutcome::Completed(summary) => print_summary(&summary),
    }
    Ok(())
}

/// Handles the default mode: liveness endpoint plus the endless refresh loop
async fn handle_run(config: &Config, runner: Runner) -> anyhow::Result<()> {
    let listener = server::bind(config.server.port)
        .await
        .with_context(|| format!("Failed to bind liveness port {}", config.server.port))?;

    tokio::spawn(async move {
        if let Err(e) = server::serve(listener).await {
            tracing::error!("Liveness endpoint stopped: {}", e);
        }
    });

    tracing::info!(
        "Probing list {} with {} workers",
        config.source.url,
        config.probe.workers
    );

    tokio::select! {
        _ = runner.run() => {}
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for shutdown signal")?;
            tracing::info!("Shutdown signal received, exiting");
        }
    }

    Ok(())
}
