use proptest::prelude::*;
use sitemaps_domain::config::SitemapsConfig;
use sitemaps_domain::content::{Post, PostStatus, PostType, ShowOnFront};
use sitemaps_domain::entry::SitemapEntry;
use sitemaps_domain::query::{Fields, QueryArgs, QueryResult};
use sitemaps_kernel::prelude::*;
use sitemaps_posts::PostsProvider;
use sitemaps_store::MemoryStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn context(store: MemoryStore, max_urls: usize) -> SitemapContext {
    let mut config = SitemapsConfig::default();
    config.max_urls = max_urls;
    SitemapContext::new(Arc::new(store), SitemapHooks::default(), config)
}

fn three_posts(show_on_front: ShowOnFront) -> MemoryStore {
    MemoryStore::builder()
        .home_url("https://example.org")
        .show_on_front(show_on_front)
        .posts([
            Post::new(12, "post").slug("twelve"),
            Post::new(5, "post").slug("five"),
            Post::new(9, "post").slug("nine"),
            Post::new(10, "post").slug("hidden").status(PostStatus::DRAFT),
            Post::new(20, "page").slug("about"),
            Post::new(30, "attachment").slug("logo"),
        ])
        .build()
        .unwrap()
}

fn locs(entries: &[SitemapEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.loc.as_str()).collect()
}

#[test]
fn subtypes_are_public_types_without_attachments() {
    let store = MemoryStore::builder()
        .post_type(PostType::new("post"))
        .post_type(PostType::new("page").hierarchical(true))
        .post_type(PostType::new("attachment"))
        .post_type(PostType::new("revision").public(false))
        .post_type(PostType::new("product"))
        .build()
        .unwrap();

    let subtypes = PostsProvider::new().object_subtypes(&context(store, 2000));
    let names: Vec<_> = subtypes.keys().map(String::as_str).collect();
    assert_eq!(names, ["post", "page", "product"]);
}

#[test]
fn post_types_filter_can_drop_subtypes() {
    let provider = PostsProvider::new();
    provider.hooks().post_types.add(|mut types, ()| {
        types.shift_remove("page");
        types
    });
    let ctx = context(three_posts(ShowOnFront::Posts), 2000);

    assert!(!provider.object_subtypes(&ctx).contains_key("page"));
    assert!(provider.url_list(&ctx, 1, "page").is_empty());
}

#[test]
fn pages_are_ordered_by_ascending_id() {
    let ctx = context(three_posts(ShowOnFront::Page), 2);
    let provider = PostsProvider::new();

    let first = provider.url_list(&ctx, 1, "post");
    assert_eq!(locs(&first), ["https://example.org/five/", "https://example.org/nine/"]);

    let second = provider.url_list(&ctx, 2, "post");
    assert_eq!(locs(&second), ["https://example.org/twelve/"]);

    assert!(provider.url_list(&ctx, 3, "post").is_empty());
    assert_eq!(provider.max_num_pages(&ctx, "post"), 2);
}

#[test]
fn unsupported_subtypes_are_empty() {
    let ctx = context(three_posts(ShowOnFront::Posts), 2000);
    let provider = PostsProvider::new();

    for page in [0, 1, 2, 50] {
        assert!(provider.url_list(&ctx, page, "attachment").is_empty());
        assert!(provider.url_list(&ctx, page, "unknown").is_empty());
        assert!(provider.url_list(&ctx, page, "").is_empty());
    }
}

#[test]
fn unsupported_subtypes_have_no_pages() {
    let store = MemoryStore::builder()
        .post_type(PostType::new("post"))
        .post_type(PostType::new("attachment"))
        .post_type(PostType::new("revision").public(false))
        .post_type(PostType::new("product"))
        .posts([
            Post::new(1, "post"),
            Post::new(2, "attachment"),
            Post::new(3, "revision"),
            Post::new(4, "product"),
        ])
        .build()
        .unwrap();
    let ctx = context(store, 2000);
    let provider = PostsProvider::new();
    provider.hooks().post_types.add(|mut types, ()| {
        types.shift_remove("product");
        types
    });

    assert_eq!(provider.max_num_pages(&ctx, "post"), 1);
    for subtype in ["attachment", "revision", "product", "unknown"] {
        assert_eq!(provider.max_num_pages(&ctx, subtype), 0, "{subtype}");
        assert!(provider.url_list(&ctx, 1, subtype).is_empty(), "{subtype}");
    }
    assert!(provider.sitemap_entries(&ctx).iter().all(|entry| entry.loc.contains("-post-")));
}

#[test]
fn empty_subtype_has_no_pages() {
    let ctx = context(three_posts(ShowOnFront::Posts), 2000);
    assert_eq!(PostsProvider::new().max_num_pages(&ctx, ""), 0);
}

#[test]
fn latest_posts_front_page_prepends_home_to_first_page() {
    let ctx = context(three_posts(ShowOnFront::Posts), 2000);
    let provider = PostsProvider::new();

    let pages = provider.url_list(&ctx, 1, "page");
    assert_eq!(locs(&pages), ["https://example.org", "https://example.org/about/"]);

    assert!(provider.url_list(&ctx, 2, "page").is_empty());
    assert_eq!(locs(&provider.url_list(&ctx, 1, "post"))[0], "https://example.org/five/");
}

#[test]
fn static_front_page_does_not_prepend_home() {
    let ctx = context(three_posts(ShowOnFront::Page), 2000);
    let pages = PostsProvider::new().url_list(&ctx, 1, "page");
    assert_eq!(locs(&pages), ["https://example.org/about/"]);
}

#[test]
fn pre_url_list_short_circuits_the_query() {
    let host = Arc::new(CountingHost::default());
    let ctx = SitemapContext::new(
        Arc::clone(&host) as Arc<dyn Host>,
        SitemapHooks::default(),
        SitemapsConfig::default(),
    );
    let provider = PostsProvider::new();
    let canned = vec![SitemapEntry::new("https://cdn.example.org/a"), SitemapEntry::new("b")];
    let replacement = canned.clone();
    provider
        .hooks()
        .pre_url_list
        .add(move |args| (args.subtype == "post").then(|| replacement.clone()));
    provider.hooks().url_list.add(|mut list, _| {
        list.clear();
        list
    });

    assert_eq!(provider.url_list(&ctx, 1, "post"), canned);
    assert_eq!(host.queries.load(Ordering::SeqCst), 0);
}

#[test]
fn pre_max_num_pages_short_circuits_the_count() {
    let ctx = context(three_posts(ShowOnFront::Posts), 2000);
    let provider = PostsProvider::new();
    provider.hooks().pre_max_num_pages.add(|subtype| (subtype == "post").then_some(42));

    assert_eq!(provider.max_num_pages(&ctx, "post"), 42);
    assert_eq!(provider.max_num_pages(&ctx, "page"), 1);
    assert_eq!(provider.max_num_pages(&ctx, ""), 0);
}

#[test]
fn entry_and_url_list_filters_enrich_results() {
    let ctx = context(three_posts(ShowOnFront::Page), 2000);
    let provider = PostsProvider::new();
    provider.hooks().entry.add(|entry, args| {
        assert_eq!(args.subtype, "post");
        entry.with_lastmod(format!("id-{}", args.post.id))
    });
    provider.hooks().url_list.add(|mut list, args| {
        assert_eq!(args.page, 1);
        list.reverse();
        list
    });

    let entries = provider.url_list(&ctx, 1, "post");
    let lastmods: Vec<_> = entries.iter().filter_map(|e| e.lastmod.as_deref()).collect();
    assert_eq!(lastmods, ["id-12", "id-9", "id-5"]);
}

#[test]
fn query_args_follow_max_urls_and_filter() {
    let ctx = context(three_posts(ShowOnFront::Posts), 2000);
    ctx.hooks().max_urls.add(|value, object_type| if object_type == "post" { 1 } else { value });

    let provider = PostsProvider::new();
    let args = provider.query_args(&ctx, "post");
    assert_eq!(args.posts_per_page, 1);
    assert_eq!(args.post_status, PostStatus::PUBLISH);
    assert!(args.no_found_rows);
    assert_eq!(args.post_type, "post");

    provider.hooks().query_args.add(|mut args, _| {
        args.post_status = PostStatus::PUBLISH | PostStatus::PRIVATE;
        args
    });
    assert_eq!(
        provider.query_args(&ctx, "post").post_status,
        PostStatus::PUBLISH | PostStatus::PRIVATE
    );
    assert_eq!(provider.max_num_pages(&ctx, "post"), 3);
}

#[test]
fn query_failures_degrade_to_empty_and_single_page() {
    let ctx = SitemapContext::new(
        Arc::new(FailingHost),
        SitemapHooks::default(),
        SitemapsConfig::default(),
    );
    let provider = PostsProvider::new();

    assert!(provider.url_list(&ctx, 1, "post").is_empty());
    assert_eq!(provider.max_num_pages(&ctx, "post"), 1);
}

#[test]
fn posts_without_permalink_are_skipped() {
    let host = Arc::new(CountingHost::default());
    let ctx = SitemapContext::new(
        host as Arc<dyn Host>,
        SitemapHooks::default(),
        SitemapsConfig::default(),
    );

    let entries = PostsProvider::new().url_list(&ctx, 1, "post");
    assert_eq!(locs(&entries), ["https://example.org/?p=2"]);
}

#[test]
fn index_entries_cover_every_page() {
    let ctx = context(three_posts(ShowOnFront::Page), 2);
    let locs: Vec<_> =
        PostsProvider::new().sitemap_entries(&ctx).into_iter().map(|e| e.loc).collect();

    assert_eq!(
        locs,
        [
            "https://example.org/wp-sitemap-posts-post-1.xml",
            "https://example.org/wp-sitemap-posts-post-2.xml",
            "https://example.org/wp-sitemap-posts-page-1.xml",
        ]
    );
}

proptest! {
    #[test]
    fn pages_cover_published_posts_exactly_once(
        ids in prop::collection::btree_set(1_u64..500, 0..30),
        max_urls in 1_usize..7,
    ) {
        let store = MemoryStore::builder()
            .posts(ids.iter().map(|id| Post::new(*id, "post")))
            .build()
            .unwrap();
        let ctx = context(store, max_urls);
        let provider = PostsProvider::new();

        let pages = provider.max_num_pages(&ctx, "post");
        prop_assert_eq!(pages as usize, ids.len().div_ceil(max_urls));

        let listed: Vec<String> = (1..=pages)
            .flat_map(|page| provider.url_list(&ctx, page, "post"))
            .map(|entry| entry.loc)
            .collect();
        let expected: Vec<String> =
            ids.iter().map(|id| format!("http://localhost/?p={id}")).collect();
        prop_assert_eq!(listed, expected);
    }
}

/// Host returning post 1 without a permalink and post 2 with one.
#[derive(Debug, Default)]
struct CountingHost {
    queries: AtomicUsize,
}

impl Host for CountingHost {
    fn blog_public(&self) -> bool {
        true
    }

    fn show_on_front(&self) -> ShowOnFront {
        ShowOnFront::Page
    }

    fn post_types(&self) -> Vec<PostType> {
        vec![PostType::new("post")]
    }

    fn query(&self, args: &QueryArgs) -> Result<QueryResult, HostError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        assert_eq!(args.fields, Fields::All);
        Ok(QueryResult {
            posts: vec![Post::new(1, "post"), Post::new(2, "post")],
            ..QueryResult::default()
        })
    }

    fn permalink(&self, post: &Post) -> Option<String> {
        (post.id != 1).then(|| format!("https://example.org/?p={}", post.id))
    }

    fn home_url(&self) -> String {
        "https://example.org".to_owned()
    }
}

#[derive(Debug)]
struct FailingHost;

impl Host for FailingHost {
    fn blog_public(&self) -> bool {
        true
    }

    fn show_on_front(&self) -> ShowOnFront {
        ShowOnFront::Page
    }

    fn post_types(&self) -> Vec<PostType> {
        vec![PostType::new("post")]
    }

    fn query(&self, _args: &QueryArgs) -> Result<QueryResult, HostError> {
        Err(HostError::Query { message: "storage offline".into(), context: None })
    }

    fn permalink(&self, _post: &Post) -> Option<String> {
        None
    }

    fn home_url(&self) -> String {
        "https://example.org".to_owned()
    }
}
