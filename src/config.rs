//! Configuration management for hostagg.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::allowlist::Allowlist;

/// Output file name, placed next to the executable unless overridden.
pub const OUTPUT_FILE: &str = "blocklist.txt";

/// Default per-source download cap (32 MB).
/// The largest default source (StevenBlack hosts) is a few MB.
const DEFAULT_MAX_SOURCE_BYTES: u64 = 32 * 1024 * 1024;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title written in the first header line of the output
    pub title: String,

    /// Per-source request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum accepted body size per source
    pub max_source_bytes: u64,

    /// Output path (defaults to `blocklist.txt` beside the executable)
    pub output: Option<PathBuf>,

    /// Blocklist sources, fetched in order
    pub sources: Vec<Source>,

    /// Domains (and their subdomains) never written to the output
    pub allowlist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "AdShield Blocklist".to_string(),
            timeout_secs: 10,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
            output: None,
            sources: default_sources(),
            allowlist: default_allowlist(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("title must not be empty");
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        if self.max_source_bytes == 0 {
            anyhow::bail!("max_source_bytes must be greater than zero");
        }

        if self.sources.is_empty() {
            anyhow::bail!("No sources configured");
        }

        for source in &self.sources {
            if !source.url.starts_with("https://") && !source.url.starts_with("http://") {
                anyhow::bail!(
                    "Source '{}' URL must use HTTP or HTTPS: {}",
                    source.label(),
                    source.url
                );
            }
        }

        Ok(())
    }

    /// Effective output path: the configured one, or `blocklist.txt` in the
    /// directory holding the running executable.
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.output {
            return Ok(path.clone());
        }
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let dir = exe
            .parent()
            .context("Executable path has no parent directory")?;
        Ok(dir.join(OUTPUT_FILE))
    }

    /// Build the allowlist matcher from the configured entries
    pub fn build_allowlist(&self) -> Allowlist {
        Allowlist::new(&self.allowlist)
    }
}

/// A remote list contributing domains to the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
}

impl Source {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            name: None,
            url: url.into(),
        }
    }

    /// Name for log lines, falling back to the URL
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }
}

// All sources are treated as blocklists, including the anudeepND list which
// is published upstream as a whitelist.
fn default_sources() -> Vec<Source> {
    vec![
        Source::new("https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts"),
        Source::new("https://adaway.org/hosts.txt"),
        Source::new(
            "https://raw.githubusercontent.com/anudeepND/whitelist/master/domains/optional-list.txt",
        ),
    ]
}

fn default_allowlist() -> Vec<String> {
    [
        "google.com",
        "android.com",
        "googleapis.com",
        "gstatic.com",
        "gvt1.com", // Play updates
        "ggpht.com",
        "play.google.com",
        "firebase.google.com",
        "cloud.google.com",
        "github.com",
        "microsoft.com",
        "apple.com",
        "whatsapp.com",
        "telegram.org",
        "instagram.com",
        "facebook.com",
        "analytics.google.com",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title, "AdShield Blocklist");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.allowlist.len(), 17);
        assert!(config.output.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_allowlist_has_no_duplicates() {
        let config = Config::default();
        assert_eq!(config.build_allowlist().len(), config.allowlist.len());
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title: Test List\nsources:\n  - url: http://127.0.0.1:8080/hosts\n    name: local\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.title, "Test List");
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].label(), "local");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.allowlist.len(), 17);
    }

    #[test]
    fn test_load_empty_allowlist() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "allowlist: []\noutput: /tmp/out.txt").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.build_allowlist().is_empty());
        assert_eq!(config.output_path().unwrap(), PathBuf::from("/tmp/out.txt"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/hostagg.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sources: [not, a: mapping").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = Config {
            sources: vec![Source::new("ftp://example.com/hosts")],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_sources() {
        let config = Config {
            sources: vec![],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            max_source_bytes: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let config = Config {
            title: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_output_beside_executable() {
        let path = Config::default().output_path().unwrap();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(path, exe_dir.join(OUTPUT_FILE));
    }

    #[test]
    fn test_source_label_falls_back_to_url() {
        let source = Source::new("https://adaway.org/hosts.txt");
        assert_eq!(source.label(), "https://adaway.org/hosts.txt");
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
