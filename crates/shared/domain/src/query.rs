use crate::constants::MAX_URLS;
use crate::content::{Post, PostStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Id,
    Date,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// Which columns a query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fields {
    #[default]
    All,
    Ids,
}

/// Criteria of one paginated content query against the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryArgs {
    pub order_by: OrderBy,
    pub order: Order,
    pub post_type: String,
    /// Page size; zero means "no limit".
    pub posts_per_page: usize,
    pub post_status: PostStatus,
    /// Skip computing the total row count.
    pub no_found_rows: bool,
    /// 1-based page number.
    pub paged: u32,
    pub fields: Fields,
    pub update_post_term_cache: bool,
    pub update_post_meta_cache: bool,
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            order_by: OrderBy::Id,
            order: Order::Asc,
            post_type: String::new(),
            posts_per_page: MAX_URLS,
            post_status: PostStatus::PUBLISH,
            no_found_rows: true,
            paged: 1,
            fields: Fields::All,
            update_post_term_cache: false,
            update_post_meta_cache: false,
        }
    }
}

impl QueryArgs {
    /// Zero-based offset of the first row of [`QueryArgs::paged`].
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.paged.max(1) as usize - 1).saturating_mul(self.posts_per_page)
    }
}

/// Rows returned by the host for one [`QueryArgs`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Populated when `fields == All`.
    pub posts: Vec<Post>,
    /// Populated when `fields == Ids`.
    pub ids: Vec<u64>,
    /// `None` when `no_found_rows` was set.
    pub found_posts: Option<u64>,
    /// `None` when `no_found_rows` was set.
    pub max_num_pages: Option<u32>,
}
