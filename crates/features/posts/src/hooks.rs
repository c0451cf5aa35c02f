use sitemaps_domain::content::Post;
use sitemaps_domain::entry::SitemapEntry;
use sitemaps_domain::query::QueryArgs;
use sitemaps_hooks::{Filter, ShortCircuit};
use sitemaps_kernel::provider::SubtypeMap;

/// Context of the URL list seams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlListArgs {
    pub subtype: String,
    pub page: u32,
}

/// Context of the per-entry seam: the post the entry was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryArgs {
    pub post: Post,
    pub subtype: String,
}

/// Extension points of [`crate::PostsProvider`].
///
/// Seams keyed by subtype alone receive the subtype name as context.
#[derive(Debug, Clone)]
pub struct PostsHooks {
    /// Subtypes offered by the provider.
    pub post_types: Filter<SubtypeMap>,
    /// Replaces the URL list of a page, skipping the query.
    pub pre_url_list: ShortCircuit<Vec<SitemapEntry>, UrlListArgs>,
    /// Enriches a single entry.
    pub entry: Filter<SitemapEntry, EntryArgs>,
    /// The finished URL list of a page.
    pub url_list: Filter<Vec<SitemapEntry>, UrlListArgs>,
    /// Replaces the page count, skipping the count query.
    pub pre_max_num_pages: ShortCircuit<u32, str>,
    /// Listing and count query criteria; the context is the subtype name.
    pub query_args: Filter<QueryArgs, str>,
}

impl Default for PostsHooks {
    fn default() -> Self {
        Self {
            post_types: Filter::new("sitemaps_posts_post_types"),
            pre_url_list: ShortCircuit::new("sitemaps_posts_pre_url_list"),
            entry: Filter::new("sitemaps_posts_entry"),
            url_list: Filter::new("sitemaps_posts_url_list"),
            pre_max_num_pages: ShortCircuit::new("sitemaps_posts_pre_max_num_pages"),
            query_args: Filter::new("sitemaps_posts_query_args"),
        }
    }
}
