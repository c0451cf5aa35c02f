//! Facade crate for the sitemap subsystem.
//! Re-exports domain/kernel primitives and wires the built-in providers.
//! Keep this crate thin: it should compose other crates, not implement sitemap logic.
//!
//! ## Usage
//! - Implement [`kernel::host::Host`] for your platform (or enable `store` for the in-memory one).
//! - Call [`bootstrap`] and ask the returned [`Sitemaps`] for its server.

use std::sync::Arc;

pub use sitemaps_domain as domain;
use sitemaps_domain::config::SitemapsConfig;
pub use sitemaps_hooks as hooks;
pub use sitemaps_kernel as kernel;
use sitemaps_kernel::host::Host;
pub use sitemaps_kernel::server::{Server, SitemapHooks, Sitemaps, SitemapsError};
#[cfg(feature = "store")]
pub use sitemaps_store as store;
use tracing::debug;

/// Built-in providers.
pub mod providers {
    #[cfg(feature = "posts")]
    pub use sitemaps_posts as posts;

    /// Build-time enabled providers (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "posts")]
        sitemaps_domain::constants::POSTS_PROVIDER,
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Extension points of the subsystem and of every built-in provider.
#[derive(Debug, Clone, Default)]
pub struct Hooks {
    pub sitemaps: SitemapHooks,
    #[cfg(feature = "posts")]
    pub posts: sitemaps_posts::PostsHooks,
}

/// Builds the lifecycle object with every enabled built-in provider as a default.
///
/// # Errors
/// Returns an error if the lifecycle object cannot be built.
pub fn bootstrap(
    host: Arc<dyn Host>,
    hooks: Hooks,
    config: SitemapsConfig,
) -> Result<Sitemaps, SitemapsError> {
    #[allow(unused_mut)]
    let mut builder = Sitemaps::builder().shared_host(host).hooks(hooks.sitemaps).config(config);

    #[cfg(feature = "posts")]
    {
        use sitemaps_kernel::provider::SitemapProvider;

        let posts = sitemaps_posts::PostsProvider::with_hooks(hooks.posts);
        builder = builder.default_provider(posts.name().to_owned(), Arc::new(posts));
    }

    debug!(providers = ?providers::ENABLED, "Bootstrapping sitemaps");
    builder.build()
}
