//! Error types for hostagg.

use thiserror::Error;

/// Why a single source contributed nothing to the run.
///
/// Fetch errors never abort the pipeline; they are carried in the
/// per-source report and logged.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("response too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },
}

impl FetchError {
    /// True when the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request(e) if e.is_timeout())
    }
}
