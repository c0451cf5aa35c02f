#![allow(dead_code, unreachable_pub)]

use sitemaps_kernel::domain::content::{Post, PostType, ShowOnFront};
use sitemaps_kernel::domain::entry::SitemapEntry;
use sitemaps_kernel::domain::query::{QueryArgs, QueryResult};
use sitemaps_kernel::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Host with a switchable indexable flag and no content.
#[derive(Debug)]
pub struct StubHost {
    pub public: AtomicBool,
}

impl StubHost {
    pub fn new(public: bool) -> Arc<Self> {
        Arc::new(Self { public: AtomicBool::new(public) })
    }

    pub fn set_public(&self, public: bool) {
        self.public.store(public, Ordering::SeqCst);
    }
}

impl Host for StubHost {
    fn blog_public(&self) -> bool {
        self.public.load(Ordering::SeqCst)
    }

    fn show_on_front(&self) -> ShowOnFront {
        ShowOnFront::Posts
    }

    fn post_types(&self) -> Vec<PostType> {
        Vec::new()
    }

    fn query(&self, _args: &QueryArgs) -> Result<QueryResult, HostError> {
        Ok(QueryResult::default())
    }

    fn permalink(&self, post: &Post) -> Option<String> {
        Some(format!("{}/?p={}", self.home_url(), post.id))
    }

    fn home_url(&self) -> String {
        "https://example.org".to_owned()
    }
}

/// Provider with fixed subtypes, each holding `pages` pages of one URL.
#[derive(Debug)]
pub struct FixedProvider {
    pub name: String,
    pub subtypes: Vec<&'static str>,
    pub pages: u32,
}

impl FixedProvider {
    pub fn shared(name: &str, subtypes: Vec<&'static str>, pages: u32) -> ProviderRef {
        Arc::new(Self { name: name.to_owned(), subtypes, pages })
    }
}

impl ListSubtypes for FixedProvider {
    fn object_subtypes(&self, _ctx: &SitemapContext) -> SubtypeMap {
        self.subtypes.iter().map(|name| ((*name).to_owned(), PostType::new(*name))).collect()
    }
}

impl GetPage for FixedProvider {
    fn url_list(&self, ctx: &SitemapContext, page_num: u32, subtype: &str) -> Vec<SitemapEntry> {
        if page_num == 0 || page_num > self.pages {
            return Vec::new();
        }
        let home = ctx.host().home_url();
        vec![SitemapEntry::new(format!("{home}/{}/{subtype}/{page_num}", self.name))]
    }
}

impl PageCount for FixedProvider {
    fn max_num_pages(&self, _ctx: &SitemapContext, _subtype: &str) -> u32 {
        self.pages
    }
}

impl SitemapProvider for FixedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn object_type(&self) -> &str {
        &self.name
    }
}
