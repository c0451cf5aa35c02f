use crate::provider::SitemapProvider;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use indexmap::map::Entry;
use parking_lot::RwLock;
use sitemaps_domain::constants::MAX_SITEMAPS;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared handle to a registered provider.
pub type ProviderRef = Arc<dyn SitemapProvider>;

/// Add-only mapping from provider name to provider, in registration order.
#[derive(Debug)]
pub struct Registry {
    providers: RwLock<IndexMap<String, ProviderRef, FxBuildHasher>>,
    max_sitemaps: usize,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(MAX_SITEMAPS)
    }
}

impl Registry {
    #[must_use]
    pub fn new(max_sitemaps: usize) -> Self {
        Self { providers: RwLock::new(IndexMap::default()), max_sitemaps }
    }

    /// Registers `provider` under `name` unless the name is blank or already taken,
    /// or the registry is full. An existing registration is never replaced.
    pub fn add(&self, name: &str, provider: ProviderRef) -> bool {
        if name.trim().is_empty() {
            warn!("Rejected sitemap provider with an empty name");
            return false;
        }

        let mut providers = self.providers.write();
        if providers.len() >= self.max_sitemaps {
            warn!(name, limit = self.max_sitemaps, "Sitemap registry is full");
            return false;
        }

        match providers.entry(name.to_owned()) {
            Entry::Occupied(_) => {
                debug!(name, "Sitemap provider already registered");
                false
            },
            Entry::Vacant(slot) => {
                slot.insert(provider);
                debug!(name, "Registered sitemap provider");
                true
            },
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<ProviderRef> {
        self.providers.read().get(name).cloned()
    }

    /// Current registrations in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<(String, ProviderRef)> {
        self.providers.read().iter().map(|(name, p)| (name.clone(), Arc::clone(p))).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
