//! Blocklist file output.
//!
//! The file is a plain domain list with a three-line `#` header:
//!
//! ```text
//! # AdShield Blocklist
//! # Generated: 2024-05-01T12:00:00.000000
//! # Total Domains: 2
//!
//! a.example.com
//! b.example.com
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::aggregator::sorted;
use crate::parser::{parse_hosts, DomainSet};

/// Local time, ISO-8601, no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Render the header block and sorted domains into `out`.
pub fn render<W: Write>(
    out: &mut W,
    title: &str,
    generated: NaiveDateTime,
    domains: &DomainSet,
) -> std::io::Result<()> {
    writeln!(out, "# {}", title)?;
    writeln!(out, "# Generated: {}", generated.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "# Total Domains: {}", domains.len())?;
    writeln!(out)?;
    for domain in sorted(domains) {
        writeln!(out, "{}", domain)?;
    }
    Ok(())
}

/// Write the blocklist to `path`, replacing any previous content.
///
/// The file is truncated and rewritten in place; an interrupted write may
/// leave it incomplete.
pub fn write_blocklist(path: &Path, title: &str, domains: &DomainSet) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output file {:?}", path))?;
    let mut out = BufWriter::new(file);

    render(&mut out, title, Local::now().naive_local(), domains)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write output file {:?}", path))?;

    Ok(())
}

/// Read a previously written blocklist back into a domain set.
pub fn read_blocklist(path: &Path) -> Result<DomainSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read blocklist {:?}", path))?;
    Ok(parse_hosts(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> DomainSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(12, 30, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_render_format() {
        let mut out = Vec::new();
        render(&mut out, "AdShield Blocklist", fixed_time(), &set(&["z.com", "a.com", "m.com"]))
            .unwrap();

        let expected = "# AdShield Blocklist\n\
                        # Generated: 2024-05-01T12:30:05.000042\n\
                        # Total Domains: 3\n\
                        \n\
                        a.com\nm.com\nz.com\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_render_empty() {
        let mut out = Vec::new();
        render(&mut out, "Empty", fixed_time(), &DomainSet::new()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("# Total Domains: 0\n\n"));
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blocklist.txt");
        std::fs::write(&path, "old content\nstale.example.com\n".repeat(100)).unwrap();

        write_blocklist(&path, "T", &set(&["b.org", "a.org"])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "# T");
        assert!(lines[1].starts_with("# Generated: "));
        assert_eq!(lines[2], "# Total Domains: 2");
        assert_eq!(lines[3], "");
        assert_eq!(&lines[4..], &["a.org", "b.org"]);
    }

    #[test]
    fn test_generated_timestamp_has_no_offset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        write_blocklist(&path, "T", &DomainSet::new()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let stamp = content.lines().nth(1).unwrap().trim_start_matches("# Generated: ");
        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
        assert!(!stamp.ends_with('Z'));
        assert!(!stamp.contains('+'));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("blocklist.txt");
        let err = write_blocklist(&path, "T", &set(&["a.com"])).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }

    #[test]
    fn test_read_back_written_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blocklist.txt");
        let domains = set(&["ads.example.com", "tracker.example.net"]);
        write_blocklist(&path, "AdShield Blocklist", &domains).unwrap();

        assert_eq!(read_blocklist(&path).unwrap(), domains);
    }
}
