//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::allowlist::Allowlist;
use crate::config::Config;
use crate::parser::DomainSet;
use crate::writer::read_blocklist;

/// How the generated list treats a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The domain or one of its parents is in the allowlist
    Allowed { entry: String },
    /// The domain or one of its parents is in the blocklist
    Blocked { rule: String },
    NotListed,
}

/// Lower-case and strip surrounding whitespace and a trailing root dot.
pub fn normalize(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_lowercase()
}

/// Evaluate `domain` the way a consumer of the list does: allowlist first,
/// then the domain itself and each parent domain against the blocklist.
pub fn evaluate(domain: &str, blocklist: &DomainSet, allowlist: &Allowlist) -> Verdict {
    let domain = normalize(domain);

    if let Some(entry) = allowlist.matching_entry(&domain) {
        return Verdict::Allowed {
            entry: entry.to_string(),
        };
    }

    let mut current = domain.as_str();
    loop {
        if blocklist.contains(current) {
            return Verdict::Blocked {
                rule: current.to_string(),
            };
        }
        match current.find('.') {
            Some(idx) => current = &current[idx + 1..],
            None => return Verdict::NotListed,
        }
    }
}

/// Run the check command
pub async fn run(domain: &str, config_path: Option<&Path>, output: Option<PathBuf>) -> Result<()> {
    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    let path = match output {
        Some(p) => p,
        None => config.output_path()?,
    };

    let blocklist = read_blocklist(&path)?;
    let allowlist = config.build_allowlist();

    println!();
    println!("{}", describe(domain, &evaluate(domain, &blocklist, &allowlist)));
    println!();

    Ok(())
}

/// One-line verdict; the matched rule is shown only when it differs from
/// the (normalized) domain itself.
fn describe(domain: &str, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Allowed { entry } => format!("{} is ALLOWED (allowlist entry {})", domain, entry),
        Verdict::Blocked { rule } if *rule == normalize(domain) => {
            format!("{} is BLOCKED", domain)
        }
        Verdict::Blocked { rule } => format!("{} is BLOCKED (matched {})", domain, rule),
        Verdict::NotListed => format!("{} is NOT blocked", domain),
    }
}
