use anyhow::{Result, anyhow};
use serde::Serialize;
use sitemaps::Server;
use sitemaps::domain::entry::SubtypePages;
use sitemaps::kernel::provider::{GetPage, PageCount, SitemapProvider};
use sitemaps::kernel::registry::ProviderRef;

#[derive(Debug, Serialize)]
struct ProviderView {
    name: String,
    object_type: String,
    subtypes: Vec<SubtypePages>,
}

#[derive(Debug, Serialize)]
struct PagesView<'a> {
    provider: &'a str,
    subtype: &'a str,
    pages: u32,
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn provider(server: &Server, name: &str) -> Result<ProviderRef> {
    server.provider(name).ok_or_else(|| anyhow!("Unknown sitemap provider '{name}'"))
}

/// Prints every provider with the page count of each subtype.
///
/// # Errors
/// Returns an error if the output cannot be serialized.
pub(crate) fn list(server: &Server) -> Result<()> {
    let providers: Vec<ProviderView> = server
        .registry()
        .get_all()
        .into_iter()
        .map(|(name, provider)| ProviderView {
            object_type: provider.object_type().to_owned(),
            subtypes: provider.sitemap_type_data(server.context()),
            name,
        })
        .collect();

    print_json(&providers)
}

/// Prints one page of entries.
///
/// # Errors
/// Returns an error if the provider is unknown.
pub(crate) fn urls(server: &Server, provider_name: &str, subtype: &str, page: u32) -> Result<()> {
    let provider = provider(server, provider_name)?;
    print_json(&provider.url_list(server.context(), page, subtype))
}

/// # Errors
/// Returns an error if the provider is unknown.
pub(crate) fn pages(server: &Server, provider_name: &str, subtype: &str) -> Result<()> {
    let provider = provider(server, provider_name)?;
    let pages = provider.max_num_pages(server.context(), subtype);
    print_json(&PagesView { provider: provider_name, subtype, pages })
}

/// # Errors
/// Returns an error if the output cannot be serialized.
pub(crate) fn index(server: &Server) -> Result<()> {
    print_json(&server.index_entries())
}
