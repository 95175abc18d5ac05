//! Merging of per-source domain sets.

use crate::parser::DomainSet;

/// Union every source's domains into one candidate set.
///
/// Duplicates across sources collapse into a single entry and source
/// order has no effect on the result.
pub fn aggregate<'a, I>(sets: I) -> DomainSet
where
    I: IntoIterator<Item = &'a DomainSet>,
{
    let mut all = DomainSet::new();
    for set in sets {
        all.extend(set.iter().cloned());
    }
    all
}

/// Return the domains in ascending byte order.
pub fn sorted(domains: &DomainSet) -> Vec<&str> {
    let mut list: Vec<&str> = domains.iter().map(String::as_str).collect();
    list.sort_unstable();
    list
}
