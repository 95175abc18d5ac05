//! Update command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::pipeline::{Pipeline, PipelineReport};
use crate::utils::{format_count, plural};

/// Run the update command
pub async fn run(config_path: Option<&Path>, output: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let mut config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    if output.is_some() {
        config.output = output;
    }

    info!("--- AdShield Aggregator Started ---");

    let fetcher = Fetcher::new(&config)?;
    let pipeline = Pipeline::new(&config, &fetcher);

    let report = if dry_run {
        info!("Dry run: the output file will not be written");
        pipeline.collect().await
    } else {
        pipeline.run().await?
    };

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &PipelineReport) {
    // Per-source failures were already logged by the fetcher
    let failed = report.failed_sources().count();

    println!();
    println!(
        "[OK] {} domains ({} raw, {} allowlisted) from {} of {} {}",
        format_count(report.final_count()),
        format_count(report.raw_count),
        format_count(report.removed),
        report.sources.len() - failed,
        report.sources.len(),
        plural(report.sources.len(), "source"),
    );
    match report.output {
        Some(ref path) => println!("Saved to: {}", path.display()),
        None => println!("Dry run: nothing written"),
    }
}
