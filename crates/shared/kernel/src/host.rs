//! The outbound seam: everything the sitemap layer needs from the content platform.

use sitemaps_domain::content::{Post, PostType, ShowOnFront};
use sitemaps_domain::query::{QueryArgs, QueryResult};
use std::borrow::Cow;
use std::fmt::Debug;

#[sitemaps_derive::sitemaps_error]
pub enum HostError {
    /// The storage layer rejected or failed the query.
    #[error("Host query failed{}: {message}", format_context(.context))]
    Query { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal host error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Content platform hosting the sitemap providers.
///
/// Implementations own storage, permalink structure and site options.
pub trait Host: Debug + Send + Sync {
    /// Whether the site asks to be indexed by search engines.
    fn blog_public(&self) -> bool;

    fn show_on_front(&self) -> ShowOnFront;

    /// Every registered content type, public or not.
    fn post_types(&self) -> Vec<PostType>;

    /// Runs one paginated content query.
    ///
    /// # Errors
    /// Returns [`HostError`] when the storage layer cannot answer.
    fn query(&self, args: &QueryArgs) -> Result<QueryResult, HostError>;

    /// Canonical URL of a post, `None` when the host cannot build one.
    fn permalink(&self, post: &Post) -> Option<String>;

    /// Root URL of the site.
    fn home_url(&self) -> String;
}
