//! Hosts-file and plain domain list parsing.

use std::collections::HashSet;

/// A set of normalized, lower-cased domains.
pub type DomainSet = HashSet<String>;

/// Addresses that mark a hosts-file entry as a blackhole.
const BLACKHOLE_ADDRS: &[&str] = &["0.0.0.0", "127.0.0.1"];

/// Parse hosts-file (`0.0.0.0 ads.example.com`) or plain list
/// (`ads.example.com`) content into a set of domains.
///
/// Full-line comments (`#`, `!`) and lines of any other shape are skipped.
/// Inline `#` comments glued to the domain token are cut off. A domain is
/// kept only if it contains a dot and is not `localhost`; no other
/// validation is done.
pub fn parse_hosts(content: &str) -> DomainSet {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let token = match parts.as_slice() {
        [addr, domain, ..] if BLACKHOLE_ADDRS.contains(addr) => *domain,
        [domain] => *domain,
        _ => return None,
    };

    let token = match token.find('#') {
        Some(idx) => &token[..idx],
        None => token,
    };

    let domain = token.trim().to_lowercase();
    is_acceptable(&domain).then_some(domain)
}

/// Minimal sanity check applied to every extracted domain.
pub fn is_acceptable(domain: &str) -> bool {
    !domain.is_empty() && domain.contains('.') && domain != "localhost"
}
