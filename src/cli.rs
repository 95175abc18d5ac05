//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hostagg")]
#[command(author, version, about = "Domain blocklist aggregator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path (built-in sources and allowlist when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug output, including allowlisted domains)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch all sources, apply the allowlist and write the blocklist (default)
    Update {
        /// Output file (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fetch and filter but don't write the output file
        #[arg(long)]
        dry_run: bool,
    },

    /// Check whether a domain is blocked by the generated list
    Check {
        /// Domain to look up
        domain: String,

        /// Blocklist file to read (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// The subcommand to run; `update` when none was given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Update {
            output: None,
            dry_run: false,
        })
    }
}
