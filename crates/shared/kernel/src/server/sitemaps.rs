use crate::host::Host;
use crate::registry::ProviderRef;
use crate::server::{Server, SitemapContext, SitemapHooks};
use parking_lot::{ReentrantMutex, RwLock};
use sitemaps_domain::config::SitemapsConfig;
use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

#[sitemaps_derive::sitemaps_error]
pub enum SitemapsError {
    #[error("Sitemaps validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Owner of the sitemap subsystem lifecycle.
///
/// The [`Server`] is built lazily by the first [`Sitemaps::get_server`] call that finds the
/// subsystem enabled, and lives until [`Sitemaps::shutdown`]. The enabled decision is
/// re-evaluated on every call: a disabled subsystem answers with `None` and empty
/// collections even if a server was built earlier.
///
/// Bootstrap is serialized: other threads wait until the `init` callbacks have returned,
/// while the bootstrapping thread may re-enter from inside `init`.
#[derive(Debug)]
pub struct Sitemaps {
    context: SitemapContext,
    defaults: Vec<(String, ProviderRef)>,
    server: RwLock<Option<Arc<Server>>>,
    ready: AtomicBool,
    bootstrap: ReentrantMutex<()>,
}

impl Sitemaps {
    #[must_use]
    pub fn builder() -> SitemapsBuilder {
        SitemapsBuilder::default()
    }

    #[must_use]
    pub const fn context(&self) -> &SitemapContext {
        &self.context
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.context.is_enabled()
    }

    /// Returns the live server, constructing it on first use.
    ///
    /// Construction registers the default providers and then fires the `init` hook
    /// with the new server, so that callbacks can add their own providers.
    #[must_use]
    pub fn get_server(&self) -> Option<Arc<Server>> {
        if !self.is_enabled() {
            debug!("Sitemaps are disabled");
            return None;
        }

        if self.ready.load(Ordering::Acquire)
            && let Some(server) = self.server.read().as_ref()
        {
            return Some(Arc::clone(server));
        }

        let _bootstrap = self.bootstrap.lock();
        // Published but not yet ready only while this thread is inside `init`.
        if let Some(server) = self.server.read().as_ref() {
            return Some(Arc::clone(server));
        }

        let server = Arc::new(Server::new(self.context.clone()));
        for (name, provider) in &self.defaults {
            server.register(name, Arc::clone(provider));
        }
        *self.server.write() = Some(Arc::clone(&server));

        info!(providers = server.registry().len(), "Sitemaps server bootstrapped");
        self.context.hooks().init.fire(&server);
        self.ready.store(true, Ordering::Release);

        Some(server)
    }

    /// Registered providers, empty when disabled.
    #[must_use]
    pub fn get_sitemaps(&self) -> Vec<(String, ProviderRef)> {
        self.get_server().map(|server| server.registry().get_all()).unwrap_or_default()
    }

    /// Registers a provider on the live server; `false` when disabled, the name is
    /// blank or taken.
    pub fn register_sitemap(&self, name: &str, provider: ProviderRef) -> bool {
        self.get_server().is_some_and(|server| server.register(name, provider))
    }

    /// Page size for `object_type`. Independent of the enabled state.
    #[must_use]
    pub fn get_max_urls(&self, object_type: &str) -> usize {
        self.context.get_max_urls(object_type)
    }

    /// Drops the live server. The next enabled [`Sitemaps::get_server`] builds a new one
    /// and fires `init` again. Returns `true` if a server was running.
    pub fn shutdown(&self) -> bool {
        let _bootstrap = self.bootstrap.lock();
        self.ready.store(false, Ordering::Release);
        let stopped = self.server.write().take().is_some();
        if stopped {
            info!("Sitemaps server shut down");
        }
        stopped
    }
}

#[derive(Debug, Default)]
pub struct SitemapsBuilder {
    host: Option<Arc<dyn Host>>,
    hooks: SitemapHooks,
    config: SitemapsConfig,
    defaults: Vec<(String, ProviderRef)>,
}

impl SitemapsBuilder {
    #[must_use]
    pub fn host(mut self, host: impl Host + 'static) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    #[must_use]
    pub fn shared_host(mut self, host: Arc<dyn Host>) -> Self {
        self.host = Some(host);
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: SitemapHooks) -> Self {
        self.hooks = hooks;
        self
    }

    #[must_use]
    pub fn config(mut self, config: SitemapsConfig) -> Self {
        self.config = config;
        self
    }

    /// Provider registered on every server construction, before `init` fires.
    #[must_use]
    pub fn default_provider(mut self, name: impl Into<String>, provider: ProviderRef) -> Self {
        self.defaults.push((name.into(), provider));
        self
    }

    /// # Errors
    /// Returns [`SitemapsError::Validation`] if no host was provided.
    pub fn build(self) -> Result<Sitemaps, SitemapsError> {
        let host = self.host.ok_or_else(|| SitemapsError::Validation {
            message: "Host not provided".into(),
            context: None,
        })?;

        Ok(Sitemaps {
            context: SitemapContext::new(host, self.hooks, self.config),
            defaults: self.defaults,
            server: RwLock::new(None),
            ready: AtomicBool::new(false),
            bootstrap: ReentrantMutex::new(()),
        })
    }
}
