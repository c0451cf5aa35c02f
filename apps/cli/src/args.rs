//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspects the sitemaps of a site described by a JSON fixture.
#[derive(Debug, Parser)]
#[command(name = "sitemaps")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Lists sitemap providers, pages and URLs of a site fixture")]
pub(crate) struct Cli {
    /// JSON site fixture (home URL, post types, posts)
    #[arg(short, long)]
    pub(crate) fixture: PathBuf,

    /// Configuration file (toml, json or yaml); `SITEMAPS__*` variables override it
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Overrides `logging.level` (trace, debug, info, warn, error, off)
    #[arg(short, long)]
    pub(crate) log_level: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List registered providers with their subtypes and page counts
    List {},
    /// Print one page of URL entries
    Urls {
        /// Provider name (e.g. 'posts')
        provider: String,
        /// Subtype name (e.g. 'page')
        subtype: String,
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Print the page count of a subtype
    Pages {
        provider: String,
        subtype: String,
    },
    /// Print the sitemap index entries of every provider
    Index {},
}
