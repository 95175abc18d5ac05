//! hostagg - domain blocklist aggregator
//!
//! Fetches hosts-format blocklists, merges them, removes allowlisted
//! domains and writes a plain domain list.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hostagg::cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.config.as_deref();

    match cli.resolved_command() {
        Commands::Update { output, dry_run } => {
            hostagg::commands::update::run(config, output, dry_run).await
        }
        Commands::Check { domain, output } => {
            hostagg::commands::check::run(&domain, config, output).await
        }
    }
}
