mod context;
mod sitemaps;

pub use context::{SitemapContext, SitemapHooks};
pub use sitemaps::{Sitemaps, SitemapsBuilder, SitemapsError, SitemapsErrorExt};

use crate::provider::{GetPage, PageCount, SitemapProvider};
use crate::registry::{ProviderRef, Registry};
use sitemaps_domain::entry::{IndexEntry, SitemapEntry};

/// A live sitemap subsystem: the provider registry plus the context providers run in.
#[derive(Debug)]
pub struct Server {
    context: SitemapContext,
    registry: Registry,
}

impl Server {
    pub(crate) fn new(context: SitemapContext) -> Self {
        let registry = Registry::new(context.config().max_sitemaps);
        Self { context, registry }
    }

    #[must_use]
    pub const fn context(&self) -> &SitemapContext {
        &self.context
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Add-only registration, see [`Registry::add`].
    pub fn register(&self, name: &str, provider: ProviderRef) -> bool {
        self.registry.add(name, provider)
    }

    #[must_use]
    pub fn provider(&self, name: &str) -> Option<ProviderRef> {
        self.registry.get(name)
    }

    /// Page `page_num` of `subtype` from the provider `name`; empty for unknown providers.
    #[must_use]
    pub fn url_list(&self, name: &str, page_num: u32, subtype: &str) -> Vec<SitemapEntry> {
        self.provider(name)
            .map(|provider| provider.url_list(&self.context, page_num, subtype))
            .unwrap_or_default()
    }

    /// Page count of `subtype` from the provider `name`; `0` for unknown providers.
    #[must_use]
    pub fn max_num_pages(&self, name: &str, subtype: &str) -> u32 {
        self.provider(name).map_or(0, |provider| provider.max_num_pages(&self.context, subtype))
    }

    /// Index records of every registered provider, in registration order.
    #[must_use]
    pub fn index_entries(&self) -> Vec<IndexEntry> {
        self.registry
            .get_all()
            .iter()
            .flat_map(|(_, provider)| provider.sitemap_entries(&self.context))
            .collect()
    }
}
