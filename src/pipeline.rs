//! The fetch → parse → merge → filter → write run.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::aggregator::aggregate;
use crate::allowlist::Allowlist;
use crate::config::Config;
use crate::fetcher::{fetch_all, ListSource, SourceReport};
use crate::parser::DomainSet;
use crate::utils::format_count_with_separator;
use crate::writer::write_blocklist;

/// Summary of one pipeline run
#[derive(Debug)]
pub struct PipelineReport {
    pub sources: Vec<SourceReport>,
    /// Unique domains across all sources, before the allowlist
    pub raw_count: usize,
    pub allowlist_size: usize,
    /// Domains removed by the allowlist
    pub removed: usize,
    pub domains: DomainSet,
    /// Where the list was written; `None` on a dry run
    pub output: Option<PathBuf>,
}

impl PipelineReport {
    pub fn final_count(&self) -> usize {
        self.domains.len()
    }

    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|r| !r.is_ok())
    }
}

/// One aggregation run over a fixed configuration.
pub struct Pipeline<'a, S: ListSource + ?Sized> {
    config: &'a Config,
    client: &'a S,
    allowlist: Allowlist,
}

impl<'a, S: ListSource + ?Sized> Pipeline<'a, S> {
    pub fn new(config: &'a Config, client: &'a S) -> Self {
        Self {
            config,
            client,
            allowlist: config.build_allowlist(),
        }
    }

    /// Fetch, merge and filter without touching the filesystem.
    pub async fn collect(&self) -> PipelineReport {
        let sources = fetch_all(self.client, &self.config.sources).await;

        let all_domains = aggregate(sources.iter().filter_map(|r| r.result.as_ref().ok()));
        info!("Total raw domains: {}", format_count_with_separator(all_domains.len()));

        info!("Applying allowlist ({} rules)...", self.allowlist.len());
        let domains = self.allowlist.filter(&all_domains);
        info!("Final domain count: {}", format_count_with_separator(domains.len()));

        PipelineReport {
            raw_count: all_domains.len(),
            allowlist_size: self.allowlist.len(),
            removed: all_domains.len() - domains.len(),
            sources,
            domains,
            output: None,
        }
    }

    /// Full run. Source failures are tolerated; a write failure is returned.
    pub async fn run(&self) -> Result<PipelineReport> {
        let path = self.config.output_path()?;
        let mut report = self.collect().await;

        write_blocklist(&path, &self.config.title, &report.domains)?;

        report.output = Some(path);
        Ok(report)
    }
}
