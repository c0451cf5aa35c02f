//! Capabilities every sitemap data source implements.
//!
//! A provider answers three questions about its content: which subtypes exist
//! ([`ListSubtypes`]), what a page of URLs looks like ([`GetPage`]) and how many pages
//! there are ([`PageCount`]). [`SitemapProvider`] ties them to a registry name.

use crate::server::SitemapContext;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use sitemaps_domain::content::PostType;
use sitemaps_domain::entry::{IndexEntry, SitemapEntry, SubtypePages};
use std::fmt::Debug;

/// Subtype descriptors keyed by subtype name, in registration order.
pub type SubtypeMap = IndexMap<String, PostType, FxBuildHasher>;

pub trait ListSubtypes {
    /// Subtypes this provider can list; empty for providers without subtypes.
    fn object_subtypes(&self, ctx: &SitemapContext) -> SubtypeMap;
}

pub trait GetPage {
    /// URL entries of the 1-based page `page_num` of `subtype`.
    ///
    /// Unsupported subtypes yield an empty list.
    fn url_list(&self, ctx: &SitemapContext, page_num: u32, subtype: &str) -> Vec<SitemapEntry>;
}

pub trait PageCount {
    /// Number of pages of `subtype`; `0` when there is nothing to list.
    fn max_num_pages(&self, ctx: &SitemapContext, subtype: &str) -> u32;
}

/// A named source of sitemap content.
pub trait SitemapProvider: ListSubtypes + GetPage + PageCount + Debug + Send + Sync {
    /// Registry name, also the provider segment of sitemap file names.
    fn name(&self) -> &str;

    /// Object type tag, used as the key of the `max_urls` lookup.
    fn object_type(&self) -> &str;

    /// Every subtype with its page count.
    ///
    /// Providers without subtypes report a single unnamed entry.
    fn sitemap_type_data(&self, ctx: &SitemapContext) -> Vec<SubtypePages> {
        let subtypes = self.object_subtypes(ctx);
        if subtypes.is_empty() {
            return vec![SubtypePages { name: String::new(), pages: self.max_num_pages(ctx, "") }];
        }

        subtypes
            .keys()
            .map(|name| SubtypePages { name: name.clone(), pages: self.max_num_pages(ctx, name) })
            .collect()
    }

    /// Sitemap index records, one per page of every subtype.
    fn sitemap_entries(&self, ctx: &SitemapContext) -> Vec<IndexEntry> {
        self.sitemap_type_data(ctx)
            .into_iter()
            .flat_map(|data| {
                (1..=data.pages).map(move |page| IndexEntry {
                    loc: self.sitemap_url(ctx, &data.name, page),
                })
            })
            .collect()
    }

    /// Location of one sitemap page: `{home}/wp-sitemap-{name}[-{subtype}]-{page}.xml`.
    fn sitemap_url(&self, ctx: &SitemapContext, subtype: &str, page: u32) -> String {
        sitemap_location(&ctx.host().home_url(), self.name(), subtype, page)
    }
}

/// Builds a sitemap file location below `home`, skipping an empty subtype segment.
#[must_use]
pub fn sitemap_location(home: &str, provider: &str, subtype: &str, page: u32) -> String {
    let home = home.trim_end_matches('/');
    if subtype.is_empty() {
        format!("{home}/wp-sitemap-{provider}-{page}.xml")
    } else {
        format!("{home}/wp-sitemap-{provider}-{subtype}-{page}.xml")
    }
}
