use crate::error::StoreError;
use crate::store::{MemoryStore, default_post_types};
use sitemaps_domain::content::{Post, PostType, ShowOnFront};

const DEFAULT_HOME_URL: &str = "http://localhost";

#[derive(Debug, Default)]
pub struct MemoryStoreBuilder {
    home_url: Option<String>,
    blog_public: Option<bool>,
    show_on_front: ShowOnFront,
    post_types: Vec<PostType>,
    posts: Vec<Post>,
}

impl MemoryStoreBuilder {
    #[must_use]
    pub fn home_url(mut self, home_url: impl Into<String>) -> Self {
        self.home_url = Some(home_url.into());
        self
    }

    /// Search engine visibility, `true` unless set.
    #[must_use]
    pub const fn blog_public(mut self, public: bool) -> Self {
        self.blog_public = Some(public);
        self
    }

    #[must_use]
    pub const fn show_on_front(mut self, show_on_front: ShowOnFront) -> Self {
        self.show_on_front = show_on_front;
        self
    }

    #[must_use]
    pub fn post_type(mut self, post_type: PostType) -> Self {
        self.post_types.push(post_type);
        self
    }

    #[must_use]
    pub fn post_types(mut self, post_types: impl IntoIterator<Item = PostType>) -> Self {
        self.post_types.extend(post_types);
        self
    }

    #[must_use]
    pub fn post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    #[must_use]
    pub fn posts(mut self, posts: impl IntoIterator<Item = Post>) -> Self {
        self.posts.extend(posts);
        self
    }

    /// # Errors
    /// Returns [`StoreError::HomeUrl`] if the home URL cannot be parsed.
    pub fn build(self) -> Result<MemoryStore, StoreError> {
        let home = self.home_url.as_deref().unwrap_or(DEFAULT_HOME_URL);
        let post_types =
            if self.post_types.is_empty() { default_post_types() } else { self.post_types };

        MemoryStore::new(
            home,
            self.blog_public.unwrap_or(true),
            self.show_on_front,
            post_types,
            self.posts,
        )
    }
}
