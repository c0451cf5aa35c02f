use crate::host::Host;
use crate::server::Server;
use sitemaps_domain::config::SitemapsConfig;
use sitemaps_hooks::{Action, Filter};
use std::sync::Arc;

/// Subsystem-wide extension points.
#[derive(Debug, Clone)]
pub struct SitemapHooks {
    /// Final say on whether sitemaps are served; receives the configured/host decision.
    pub is_enabled: Filter<bool>,
    /// Fired once per server construction; register additional providers here.
    pub init: Action<Server>,
    /// Page size per object type; the context is the object type.
    pub max_urls: Filter<usize, str>,
}

impl Default for SitemapHooks {
    fn default() -> Self {
        Self {
            is_enabled: Filter::new("sitemaps_is_enabled"),
            init: Action::new("sitemaps_init"),
            max_urls: Filter::new("sitemaps_max_urls"),
        }
    }
}

/// Everything a provider needs to answer a request: host access, hooks and settings.
#[derive(Debug, Clone)]
pub struct SitemapContext {
    host: Arc<dyn Host>,
    hooks: SitemapHooks,
    config: SitemapsConfig,
}

impl SitemapContext {
    #[must_use]
    pub fn new(host: Arc<dyn Host>, hooks: SitemapHooks, config: SitemapsConfig) -> Self {
        Self { host, hooks, config }
    }

    #[must_use]
    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    #[must_use]
    pub const fn hooks(&self) -> &SitemapHooks {
        &self.hooks
    }

    #[must_use]
    pub const fn config(&self) -> &SitemapsConfig {
        &self.config
    }

    /// Maximum number of URLs on one sitemap page of `object_type`.
    ///
    /// Per-type config overrides win over the global default; the `max_urls`
    /// filter sees the result last.
    #[must_use]
    pub fn get_max_urls(&self, object_type: &str) -> usize {
        let configured =
            self.config.max_urls_by_type.get(object_type).copied().unwrap_or(self.config.max_urls);
        self.hooks.max_urls.apply(configured, object_type)
    }

    /// Configured switch if present, else the host's indexable flag, then the `is_enabled` filter.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        let enabled = self.config.enabled.unwrap_or_else(|| self.host.blog_public());
        self.hooks.is_enabled.apply(enabled, &())
    }
}
