//! # hostagg - Domain Blocklist Aggregator
//!
//! Builds a single plain-text domain blocklist out of several public
//! hosts-format lists, minus an allowlist of domains that must keep working.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        hostagg                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                 │
//! │    └── Commands: update (default), check                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Config (serde_yaml)                                        │
//! │    └── Sources, allowlist, title, timeout, output path      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                                 │
//! │    └── One timeout-bounded attempt per source, in order     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Parser                                                     │
//! │    └── hosts-file and plain domain list lines               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Aggregator + Allowlist                                     │
//! │    └── Set union, then exact/subdomain allowlist removal    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Writer                                                     │
//! │    └── Header (title, timestamp, count) + sorted domains    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use hostagg::config::Config;
//! use hostagg::fetcher::Fetcher;
//! use hostagg::pipeline::Pipeline;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let fetcher = Fetcher::new(&config)?;
//!
//!     let report = Pipeline::new(&config, &fetcher).run().await?;
//!     println!("{} domains written", report.final_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! - A source that fails (network error, timeout, non-2xx, oversized body)
//!   contributes no domains; the run continues.
//! - Unparseable lines are skipped silently.
//! - Failing to write the output file fails the run.
//!
//! ## Modules
//!
//! - [`aggregator`] - Union and ordering of domain sets
//! - [`allowlist`] - Exact and subdomain allowlist matching
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`error`] - Per-source fetch errors
//! - [`fetcher`] - HTTP client for downloading blocklists
//! - [`parser`] - Hosts-file parsing
//! - [`pipeline`] - The full fetch → filter → write run
//! - [`utils`] - Formatting helpers
//! - [`writer`] - Output file rendering

pub mod aggregator;
pub mod allowlist;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod pipeline;
pub mod utils;
pub mod writer;

pub use config::Config;
pub use parser::{parse_hosts, DomainSet};
