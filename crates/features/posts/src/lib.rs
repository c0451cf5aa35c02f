//! Posts sitemap provider.
//!
//! Lists every public post type except attachments, one URL per published post,
//! in ascending ID order. Page 1 of the `page` subtype also carries the home URL when
//! the front page shows the latest posts.

mod hooks;
mod provider;

pub use hooks::{EntryArgs, PostsHooks, UrlListArgs};
pub use provider::PostsProvider;
