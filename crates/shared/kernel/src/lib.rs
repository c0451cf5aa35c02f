//! Kernel of the sitemap subsystem.
//!
//! Providers enumerate content through the [`host::Host`] seam and are collected in an
//! add-only [`registry::Registry`]. A [`server::Sitemaps`] value owns the lifecycle:
//! it builds the [`server::Server`] lazily, gates it behind the enabled decision and fires
//! the `init` hook so outside code can register providers.
//!
//! ```rust,ignore
//! use sitemaps_kernel::prelude::*;
//!
//! let sitemaps = Sitemaps::builder().host(my_host).default_provider("posts", posts).build()?;
//! if let Some(server) = sitemaps.get_server() {
//!     let first_page = server.url_list("posts", 1, "page");
//! }
//! ```

pub mod config;
pub mod host;
pub mod prelude;
pub mod provider;
pub mod registry;
pub mod server;

pub use sitemaps_domain as domain;
pub use sitemaps_hooks as hooks;
