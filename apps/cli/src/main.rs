#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Command};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, SecondsFormat};
use clap::Parser;
use sitemaps::domain::config::SitemapsConfig;
use sitemaps::kernel::config::load_config;
use sitemaps::store::MemoryStore;
use sitemaps::{Hooks, bootstrap};
use sitemaps_logger::Logger;
use std::sync::Arc;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg: SitemapsConfig = match &cli.config {
        Some(path) => load_config(Some(path)).context("Critical: Configuration is malformed")?,
        None => SitemapsConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        cfg.logging.level.clone_from(level);
    }

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let store = MemoryStore::from_fixture(&cli.fixture)
        .with_context(|| format!("Failed to load site fixture {}", cli.fixture.display()))?;

    let hooks = Hooks::default();
    hooks.posts.entry.add(|entry, args| match DateTime::from_timestamp(args.post.modified, 0) {
        Some(modified) if args.post.modified > 0 => {
            entry.with_lastmod(modified.to_rfc3339_opts(SecondsFormat::Secs, true))
        },
        _ => entry,
    });

    let sitemaps = bootstrap(Arc::new(store), hooks, cfg)?;
    let Some(server) = sitemaps.get_server() else {
        bail!("Sitemaps are disabled for this site");
    };

    debug!(command = ?cli.command, "Running command");

    match cli.command {
        Command::List {} => handlers::list(&server)?,
        Command::Urls { provider, subtype, page } => {
            handlers::urls(&server, &provider, &subtype, page)?;
        },
        Command::Pages { provider, subtype } => handlers::pages(&server, &provider, &subtype)?,
        Command::Index {} => handlers::index(&server)?,
    }

    Ok(())
}
