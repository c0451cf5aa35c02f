use crate::constants::{MAX_SITEMAPS, MAX_URLS};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level sitemap configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapsConfigInner {
    /// Forces the subsystem on or off; `None` follows the host's indexable flag.
    pub enabled: Option<bool>,
    /// Default page size of every sitemap.
    pub max_urls: usize,
    /// Page size overrides keyed by object type (`post`, `user`, ...).
    pub max_urls_by_type: BTreeMap<String, usize>,
    /// Upper bound of registered providers.
    pub max_sitemaps: usize,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into providers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SitemapsConfig {
    #[serde(flatten, default)]
    inner: Arc<SitemapsConfigInner>,
}

impl Deref for SitemapsConfig {
    type Target = SitemapsConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SitemapsConfig {
    fn deref_mut(&mut self) -> &mut SitemapsConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// `[logging]` section consumed by the logger bootstrap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    /// Extra `EnvFilter` directives.
    pub filter: Option<String>,
    pub console: bool,
    /// Enables rolling files in this directory.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for SitemapsConfigInner {
    fn default() -> Self {
        Self {
            enabled: None,
            max_urls: MAX_URLS,
            max_urls_by_type: BTreeMap::new(),
            max_sitemaps: MAX_SITEMAPS,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
            max_files: 10,
        }
    }
}
