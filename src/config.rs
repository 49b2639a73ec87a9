//! Runtime configuration.
//!
//! Resolved once at startup from command-line flags and environment
//! variables, then passed to the parts that need it. Flags win over the
//! environment; the environment wins over built-in defaults.

use anyhow::{bail, Result};
use doclist_core::DEFAULT_ENDPOINT;
use std::path::PathBuf;

pub const ENDPOINT_ENV: &str = "DOCLIST_ENDPOINT";
pub const SOURCE_FILE_ENV: &str = "DOCLIST_SOURCE_FILE";
pub const PAGE_URL_ENV: &str = "DOCLIST_PAGE_URL";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Page the shareable links point at
pub const DEFAULT_PAGE_URL: &str = "http://localhost:3000/";

/// Where the doctor feed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Endpoint(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: DataSource,
    pub page_url: String,
    pub color: bool,
}

/// Values supplied on the command line; `None` means "not given"
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub file: Option<PathBuf>,
    pub page_url: Option<String>,
    pub no_color: bool,
}

impl AppConfig {
    /// Resolve configuration from flags and the process environment
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |name| std::env::var(name).ok())
    }

    /// Resolve configuration with an explicit environment lookup
    pub fn resolve_with(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let read_env = |name: &str| {
            env(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if overrides.endpoint.is_some() && overrides.file.is_some() {
            bail!("--endpoint and --file cannot be used together");
        }

        let source = match (overrides.endpoint, overrides.file) {
            (Some(url), _) => DataSource::Endpoint(url),
            (None, Some(path)) => DataSource::File(path),
            (None, None) => match (read_env(ENDPOINT_ENV), read_env(SOURCE_FILE_ENV)) {
                (Some(url), _) => DataSource::Endpoint(url),
                (None, Some(path)) => DataSource::File(PathBuf::from(path)),
                (None, None) => DataSource::Endpoint(DEFAULT_ENDPOINT.to_string()),
            },
        };

        if let DataSource::Endpoint(url) = &source {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("endpoint must be an http(s) URL, got '{}'", url);
            }
        }

        let page_url = overrides
            .page_url
            .or_else(|| read_env(PAGE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());

        // NO_COLOR disables colour whenever it is present, even if empty
        let color = !overrides.no_color && env(NO_COLOR_ENV).is_none();

        Ok(Self {
            source,
            page_url,
            color,
        })
    }

    /// Full shareable link for a query string produced by the session
    pub fn share_link(&self, query_string: &str) -> String {
        let base = self.page_url.split('?').next().unwrap_or_default();
        format!("{}{}", base, query_string)
    }
}
