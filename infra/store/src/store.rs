use crate::builder::MemoryStoreBuilder;
use crate::error::{StoreError, StoreErrorExt};
use crate::fixture::SiteFixture;
use parking_lot::RwLock;
use sitemaps_domain::constants::{ATTACHMENT, PAGE, POST};
use sitemaps_domain::content::{Post, PostType, ShowOnFront};
use sitemaps_domain::query::{Fields, Order, OrderBy, QueryArgs, QueryResult};
use sitemaps_kernel::host::{Host, HostError};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};
use url::Url;

/// `post`, `page` (hierarchical) and the non-public `attachment` type.
#[must_use]
pub fn default_post_types() -> Vec<PostType> {
    vec![
        PostType::new(POST).label("Posts"),
        PostType::new(PAGE).label("Pages").hierarchical(true),
        PostType::new(ATTACHMENT).label("Media").public(false),
    ]
}

/// A [`Host`] keeping the whole site in memory.
#[derive(Debug)]
pub struct MemoryStore {
    home: Url,
    blog_public: AtomicBool,
    show_on_front: ShowOnFront,
    post_types: Vec<PostType>,
    posts: RwLock<BTreeMap<u64, Post>>,
}

impl MemoryStore {
    #[must_use]
    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::default()
    }

    pub(crate) fn new(
        home: &str,
        blog_public: bool,
        show_on_front: ShowOnFront,
        post_types: Vec<PostType>,
        posts: Vec<Post>,
    ) -> Result<Self, StoreError> {
        let mut home = Url::parse(home).context("Failed to parse home URL")?;
        if !home.path().ends_with('/') {
            let path = format!("{}/", home.path());
            home.set_path(&path);
        }

        Ok(Self {
            home,
            blog_public: AtomicBool::new(blog_public),
            show_on_front,
            post_types,
            posts: RwLock::new(posts.into_iter().map(|post| (post.id, post)).collect()),
        })
    }

    /// Parses a JSON site fixture.
    ///
    /// # Errors
    /// Returns [`StoreError::Fixture`] for malformed JSON and [`StoreError::HomeUrl`] for an
    /// unparsable home URL.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let fixture: SiteFixture =
            serde_json::from_str(json).context("Failed to parse site fixture")?;
        MemoryStoreBuilder::from(fixture).build()
    }

    /// Reads and parses a JSON site fixture file.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the file cannot be read, otherwise as
    /// [`MemoryStore::from_json`].
    pub fn from_fixture(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).context("Failed to read site fixture")?;
        let store = Self::from_json(&json)?;
        debug!(path = %path.display(), posts = store.len(), "Loaded site fixture");
        Ok(store)
    }

    pub fn set_blog_public(&self, public: bool) {
        self.blog_public.store(public, Ordering::Relaxed);
    }

    /// Adds or replaces a post, returning the previous version.
    pub fn insert(&self, post: Post) -> Option<Post> {
        self.posts.write().insert(post.id, post)
    }

    pub fn remove(&self, id: u64) -> Option<Post> {
        self.posts.write().remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<Post> {
        self.posts.read().get(&id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Host for MemoryStore {
    fn blog_public(&self) -> bool {
        self.blog_public.load(Ordering::Relaxed)
    }

    fn show_on_front(&self) -> ShowOnFront {
        self.show_on_front
    }

    fn post_types(&self) -> Vec<PostType> {
        self.post_types.clone()
    }

    fn query(&self, args: &QueryArgs) -> Result<QueryResult, HostError> {
        let posts = self.posts.read();
        let mut matched: Vec<&Post> = posts
            .values()
            .filter(|post| args.post_type.is_empty() || post.post_type == args.post_type)
            .filter(|post| args.post_status.intersects(post.status))
            .collect();

        matched.sort_by(|a, b| {
            let ordering = match args.order_by {
                OrderBy::Id => a.id.cmp(&b.id),
                OrderBy::Date => a.modified.cmp(&b.modified).then(a.id.cmp(&b.id)),
                OrderBy::Title => a.title.cmp(&b.title).then(a.id.cmp(&b.id)),
            };
            match args.order {
                Order::Asc => ordering,
                Order::Desc => ordering.reverse(),
            }
        });

        let found = matched.len();
        let page: Vec<&Post> = if args.posts_per_page == 0 {
            matched
        } else {
            matched.into_iter().skip(args.offset()).take(args.posts_per_page).collect()
        };

        let (found_posts, max_num_pages) = if args.no_found_rows {
            (None, None)
        } else {
            let pages = if args.posts_per_page == 0 {
                usize::from(found > 0)
            } else {
                found.div_ceil(args.posts_per_page)
            };
            (
                Some(u64::try_from(found).unwrap_or(u64::MAX)),
                Some(u32::try_from(pages).unwrap_or(u32::MAX)),
            )
        };

        trace!(
            post_type = %args.post_type,
            paged = args.paged,
            found,
            returned = page.len(),
            "Memory query"
        );

        let result = match args.fields {
            Fields::All => QueryResult {
                posts: page.into_iter().cloned().collect(),
                found_posts,
                max_num_pages,
                ..QueryResult::default()
            },
            Fields::Ids => QueryResult {
                ids: page.into_iter().map(|post| post.id).collect(),
                found_posts,
                max_num_pages,
                ..QueryResult::default()
            },
        };
        Ok(result)
    }

    fn permalink(&self, post: &Post) -> Option<String> {
        let mut url = self.home.clone();
        if post.slug.is_empty() {
            url.query_pairs_mut().clear().append_pair("p", &post.id.to_string());
            return Some(url.into());
        }

        let posts = self.posts.read();
        let mut slugs = vec![post.slug.as_str()];
        let mut parent = post.parent;
        while let Some(ancestor) = parent.and_then(|id| posts.get(&id)) {
            // Guard against parent cycles.
            if ancestor.slug.is_empty() || slugs.len() > posts.len() {
                break;
            }
            slugs.push(ancestor.slug.as_str());
            parent = ancestor.parent;
        }

        {
            let mut segments = url.path_segments_mut().ok()?;
            segments.pop_if_empty().extend(slugs.iter().rev()).push("");
        }
        Some(url.into())
    }

    fn home_url(&self) -> String {
        self.home.as_str().trim_end_matches('/').to_owned()
    }
}
