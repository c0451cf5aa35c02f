use crate::builder::MemoryStoreBuilder;
use serde::Deserialize;
use sitemaps_domain::content::{Post, PostType, ShowOnFront};

/// On-disk description of a site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteFixture {
    pub home_url: Option<String>,
    pub blog_public: Option<bool>,
    pub show_on_front: ShowOnFront,
    pub post_types: Vec<PostType>,
    pub posts: Vec<Post>,
}

impl From<SiteFixture> for MemoryStoreBuilder {
    fn from(fixture: SiteFixture) -> Self {
        let mut builder = Self::default()
            .show_on_front(fixture.show_on_front)
            .post_types(fixture.post_types)
            .posts(fixture.posts);
        if let Some(home_url) = fixture.home_url {
            builder = builder.home_url(home_url);
        }
        if let Some(public) = fixture.blog_public {
            builder = builder.blog_public(public);
        }
        builder
    }
}
