//! Allowlist subtraction for domain blocklists.

use std::collections::HashSet;
use tracing::debug;

use crate::parser::DomainSet;

/// Domains that must never end up in the generated list.
///
/// An entry allows itself and every subdomain of it: `google.com` allows
/// `google.com` and `ads.google.com` but not `notgoogle.com`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allowlist {
    entries: HashSet<String>,
}

impl Allowlist {
    /// Build an allowlist, normalizing entries to trimmed lower case.
    /// Blank entries are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the entry that allows `domain`, if any.
    ///
    /// `domain` is allowed by `a` when it equals `a` or ends with `"." + a`.
    /// Each suffix following a `.` in `domain` is looked up in the set,
    /// which matches the pairwise suffix comparison exactly while staying
    /// O(labels) per domain.
    pub fn matching_entry(&self, domain: &str) -> Option<&str> {
        if let Some(entry) = self.entries.get(domain) {
            return Some(entry.as_str());
        }
        domain
            .match_indices('.')
            .find_map(|(idx, _)| self.entries.get(&domain[idx + 1..]))
            .map(String::as_str)
    }

    pub fn is_allowed(&self, domain: &str) -> bool {
        self.matching_entry(domain).is_some()
    }

    /// Return the candidates that are not allowed.
    pub fn filter(&self, domains: &DomainSet) -> DomainSet {
        domains
            .iter()
            .filter(|domain| match self.matching_entry(domain) {
                Some(entry) => {
                    debug!("Allowlisted: {} (matched {})", domain, entry);
                    false
                }
                None => true,
            })
            .cloned()
            .collect()
    }
}
