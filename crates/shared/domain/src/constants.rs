//! Well-known names shared by providers, hosts and tools.

/// Default upper bound of URLs on a single sitemap page.
pub const MAX_URLS: usize = 2000;

/// Default upper bound of registered sitemap providers.
pub const MAX_SITEMAPS: usize = 50_000;

/// Registry name of the built-in posts provider.
pub const POSTS_PROVIDER: &str = "posts";

/// Object type served by the posts provider, also the key of its `max_urls` lookup.
pub const POST_OBJECT_TYPE: &str = "post";

pub const POST: &str = "post";
pub const PAGE: &str = "page";

/// Binary uploads never get their own sitemap.
pub const ATTACHMENT: &str = "attachment";
