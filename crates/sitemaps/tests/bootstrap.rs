use sitemaps::domain::content::{Post, ShowOnFront};
use sitemaps::domain::config::SitemapsConfig;
use sitemaps::kernel::host::Host;
use sitemaps::{Hooks, bootstrap, providers};
use sitemaps_store::MemoryStore;
use std::sync::Arc;

fn store(public: bool) -> Arc<MemoryStore> {
    Arc::new(
        MemoryStore::builder()
            .home_url("https://example.org")
            .blog_public(public)
            .show_on_front(ShowOnFront::Posts)
            .posts([
                Post::new(1, "post").slug("one"),
                Post::new(2, "post").slug("two"),
                Post::new(3, "post").slug("three"),
                Post::new(4, "page").slug("contact"),
            ])
            .build()
            .unwrap(),
    )
}

#[test]
fn posts_provider_is_enabled_by_default() {
    assert!(providers::is_enabled("posts"));
    assert!(!providers::is_enabled("users"));
}

#[test]
fn bootstrap_registers_posts_provider() {
    let sitemaps =
        bootstrap(store(true), Hooks::default(), SitemapsConfig::default()).unwrap();

    let names: Vec<_> = sitemaps.get_sitemaps().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["posts"]);
}

#[test]
fn end_to_end_pagination_with_page_size_two() {
    let mut config = SitemapsConfig::default();
    config.max_urls = 2;
    let sitemaps = bootstrap(store(true), Hooks::default(), config).unwrap();
    let server = sitemaps.get_server().unwrap();

    let first: Vec<_> = server.url_list("posts", 1, "post").into_iter().map(|e| e.loc).collect();
    assert_eq!(first, ["https://example.org/one/", "https://example.org/two/"]);

    let second: Vec<_> = server.url_list("posts", 2, "post").into_iter().map(|e| e.loc).collect();
    assert_eq!(second, ["https://example.org/three/"]);

    assert_eq!(server.max_num_pages("posts", "post"), 2);
    assert_eq!(sitemaps.get_max_urls("post"), 2);
}

#[test]
fn private_site_serves_nothing_until_made_public() {
    let host = store(false);
    let sitemaps =
        bootstrap(Arc::clone(&host) as Arc<dyn Host>, Hooks::default(), SitemapsConfig::default())
            .unwrap();

    assert!(sitemaps.get_server().is_none());
    assert!(sitemaps.get_sitemaps().is_empty());

    host.set_blog_public(true);
    assert_eq!(sitemaps.get_sitemaps().len(), 1);
}

#[test]
fn init_hook_sees_the_posts_provider() {
    let hooks = Hooks::default();
    hooks.sitemaps.init.add(|server| {
        assert!(server.provider("posts").is_some());
    });
    let sitemaps = bootstrap(store(true), hooks, SitemapsConfig::default()).unwrap();

    let index: Vec<_> =
        sitemaps.get_server().unwrap().index_entries().into_iter().map(|e| e.loc).collect();
    assert_eq!(
        index,
        [
            "https://example.org/wp-sitemap-posts-post-1.xml",
            "https://example.org/wp-sitemap-posts-page-1.xml",
        ]
    );
}

#[test]
fn posts_hooks_reach_the_registered_provider() {
    let hooks = Hooks::default();
    hooks.posts.entry.add(|entry, args| entry.with_lastmod(args.post.id.to_string()));
    let sitemaps = bootstrap(store(true), hooks, SitemapsConfig::default()).unwrap();

    let pages = sitemaps.get_server().unwrap().url_list("posts", 1, "page");
    assert_eq!(pages[0].loc, "https://example.org");
    assert_eq!(pages[0].lastmod, None);
    assert_eq!(pages[1].lastmod.as_deref(), Some("4"));
}
