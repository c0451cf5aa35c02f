use crate::hooks::{EntryArgs, PostsHooks, UrlListArgs};
use sitemaps_domain::constants::{ATTACHMENT, PAGE, POST_OBJECT_TYPE, POSTS_PROVIDER};
use sitemaps_domain::content::{PostStatus, ShowOnFront};
use sitemaps_domain::entry::SitemapEntry;
use sitemaps_domain::query::{Fields, Order, OrderBy, QueryArgs};
use sitemaps_kernel::provider::{GetPage, ListSubtypes, PageCount, SitemapProvider, SubtypeMap};
use sitemaps_kernel::server::SitemapContext;
use tracing::{debug, warn};

/// Sitemap provider for post-like content.
#[derive(Debug, Clone, Default)]
pub struct PostsProvider {
    hooks: PostsHooks,
}

impl PostsProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_hooks(hooks: PostsHooks) -> Self {
        Self { hooks }
    }

    #[must_use]
    pub const fn hooks(&self) -> &PostsHooks {
        &self.hooks
    }

    /// Criteria of the listing query for `subtype`, after the `query_args` filter.
    #[must_use]
    pub fn query_args(&self, ctx: &SitemapContext, subtype: &str) -> QueryArgs {
        let args = QueryArgs {
            order_by: OrderBy::Id,
            order: Order::Asc,
            post_type: subtype.to_owned(),
            posts_per_page: ctx.get_max_urls(self.object_type()),
            post_status: PostStatus::PUBLISH,
            no_found_rows: true,
            paged: 1,
            fields: Fields::All,
            update_post_term_cache: false,
            update_post_meta_cache: false,
        };
        self.hooks.query_args.apply(args, subtype)
    }
}

impl ListSubtypes for PostsProvider {
    fn object_subtypes(&self, ctx: &SitemapContext) -> SubtypeMap {
        let post_types = ctx
            .host()
            .post_types()
            .into_iter()
            .filter(|post_type| post_type.public && post_type.name != ATTACHMENT)
            .map(|post_type| (post_type.name.clone(), post_type))
            .collect();

        self.hooks.post_types.apply(post_types, &())
    }
}

impl GetPage for PostsProvider {
    fn url_list(&self, ctx: &SitemapContext, page_num: u32, subtype: &str) -> Vec<SitemapEntry> {
        if !self.object_subtypes(ctx).contains_key(subtype) {
            debug!(subtype, "Unsupported posts subtype");
            return Vec::new();
        }

        let list_args = UrlListArgs { subtype: subtype.to_owned(), page: page_num };
        if let Some(url_list) = self.hooks.pre_url_list.resolve(&list_args) {
            return url_list;
        }

        let host = ctx.host();
        let query = QueryArgs { paged: page_num, ..self.query_args(ctx, subtype) };
        let posts = match host.query(&query) {
            Ok(result) => result.posts,
            Err(err) => {
                warn!(subtype, page = page_num, error = %err, "Posts sitemap query failed");
                Vec::new()
            },
        };

        let mut url_list = Vec::with_capacity(posts.len() + 1);

        // The latest-posts front page has no page record of its own.
        if subtype == PAGE && page_num == 1 && host.show_on_front() == ShowOnFront::Posts {
            url_list.push(SitemapEntry::new(host.home_url()));
        }

        for post in posts {
            let Some(loc) = host.permalink(&post) else {
                debug!(id = post.id, subtype, "Skipping post without permalink");
                continue;
            };
            let entry_args = EntryArgs { post, subtype: subtype.to_owned() };
            url_list.push(self.hooks.entry.apply(SitemapEntry::new(loc), &entry_args));
        }

        self.hooks.url_list.apply(url_list, &list_args)
    }
}

impl PageCount for PostsProvider {
    fn max_num_pages(&self, ctx: &SitemapContext, subtype: &str) -> u32 {
        if subtype.is_empty() {
            return 0;
        }

        if !self.object_subtypes(ctx).contains_key(subtype) {
            debug!(subtype, "Unsupported posts subtype");
            return 0;
        }

        if let Some(pages) = self.hooks.pre_max_num_pages.resolve(subtype) {
            return pages;
        }

        let query = QueryArgs {
            paged: 1,
            fields: Fields::Ids,
            no_found_rows: false,
            ..self.query_args(ctx, subtype)
        };

        match ctx.host().query(&query) {
            Ok(result) => result.max_num_pages.unwrap_or(1),
            Err(err) => {
                warn!(subtype, error = %err, "Posts sitemap count query failed");
                1
            },
        }
    }
}

impl SitemapProvider for PostsProvider {
    fn name(&self) -> &str {
        POSTS_PROVIDER
    }

    fn object_type(&self) -> &str {
        POST_OBJECT_TYPE
    }
}
