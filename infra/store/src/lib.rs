//! In-memory content host.
//!
//! [`MemoryStore`] implements [`sitemaps_kernel::host::Host`] over a fixed set of post types
//! and posts, either assembled with [`MemoryStore::builder`] or loaded from a JSON site
//! fixture:
//!
//! ```json
//! {
//!   "home_url": "https://example.org",
//!   "blog_public": true,
//!   "show_on_front": "posts",
//!   "posts": [
//!     { "id": 1, "post_type": "post", "slug": "hello-world", "modified": 1700000000 },
//!     { "id": 2, "post_type": "page", "slug": "about" }
//!   ]
//! }
//! ```
//!
//! Without a `post_types` list the store registers `post`, `page` and `attachment`.

mod builder;
mod error;
mod fixture;
mod store;

pub use builder::MemoryStoreBuilder;
pub use error::{StoreError, StoreErrorExt};
pub use fixture::SiteFixture;
pub use store::{MemoryStore, default_post_types};
