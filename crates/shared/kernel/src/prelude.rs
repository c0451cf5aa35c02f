pub use crate::host::{Host, HostError, HostErrorExt};
pub use crate::provider::{GetPage, ListSubtypes, PageCount, SitemapProvider, SubtypeMap};
pub use crate::registry::{ProviderRef, Registry};
pub use crate::server::{Server, SitemapContext, SitemapHooks, Sitemaps, SitemapsError};
pub use sitemaps_domain::entry::{IndexEntry, SitemapEntry, SubtypePages};
pub use sitemaps_hooks::{Action, Filter, Priority, ShortCircuit};
