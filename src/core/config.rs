//! Environment-driven configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::client::constants::{DEFAULT_BASE_URL, DEFAULT_FALLBACK_DELAY_MS, DEFAULT_TIMEOUT_SECS};
use super::client::{FileTokenStore, MemoryTokenStore, ReportClientBuilder, TokenStore};
use super::{ReportClient, ReportError};

pub const ENV_API_URL: &str = "LOAN_REPORTS_API_URL";
pub const ENV_TOKEN_FILE: &str = "LOAN_REPORTS_TOKEN_FILE";
pub const ENV_TIMEOUT_SECS: &str = "LOAN_REPORTS_TIMEOUT_SECS";
pub const ENV_FALLBACK_DELAY_MS: &str = "LOAN_REPORTS_FALLBACK_DELAY_MS";
pub const ENV_DOWNLOAD_DIR: &str = "LOAN_REPORTS_DOWNLOAD_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: Url,
    /// Persisted bearer token. `None` keeps the token in memory only.
    pub token_file: Option<PathBuf>,
    pub timeout: Duration,
    pub fallback_delay: Duration,
    pub download_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            token_file: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fallback_delay: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS),
            download_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the `LOAN_REPORTS_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Config`] when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ReportError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Config`] when a value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ReportError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(raw) = get(ENV_API_URL) {
            cfg.api_url = Url::parse(raw.trim())
                .map_err(|e| ReportError::Config(format!("{ENV_API_URL}: {e}")))?;
        }
        if let Some(raw) = get(ENV_TOKEN_FILE) {
            cfg.token_file = Some(PathBuf::from(raw));
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            cfg.timeout = Duration::from_secs(parse_u64(ENV_TIMEOUT_SECS, &raw)?);
        }
        if let Some(raw) = get(ENV_FALLBACK_DELAY_MS) {
            cfg.fallback_delay = Duration::from_millis(parse_u64(ENV_FALLBACK_DELAY_MS, &raw)?);
        }
        if let Some(raw) = get(ENV_DOWNLOAD_DIR) {
            cfg.download_dir = PathBuf::from(raw);
        }

        tracing::debug!(api_url = %cfg.api_url, "configuration loaded");
        Ok(cfg)
    }

    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        match &self.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())),
            None => Arc::new(MemoryTokenStore::default()),
        }
    }

    /// A client builder preloaded with this configuration.
    pub fn client_builder(&self) -> ReportClientBuilder {
        ReportClient::builder()
            .base_url(self.api_url.clone())
            .token_store(self.token_store())
            .timeout(self.timeout)
            .fallback_delay(self.fallback_delay)
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64, ReportError> {
    raw.trim()
        .parse()
        .map_err(|e| ReportError::Config(format!("{key}: {e}")))
}
