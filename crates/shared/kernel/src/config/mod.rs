use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[sitemaps_derive::sitemaps_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration structure from a file plus environment overrides.
///
/// Layering:
/// 1. **Base File**: `path`, or `sitemaps` in the working directory. The format follows the
///    extension (`.toml`, `.json`, `.yaml`); without one the known extensions are probed.
/// 2. **Environment Overrides**: variables prefixed with `SITEMAPS__`, nested with double
///    underscores (e.g., `SITEMAPS__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does not match `T`.
///
/// # Example
/// ```rust
/// use sitemaps_kernel::config::load_config;
/// use sitemaps_kernel::domain::config::SitemapsConfig;
///
/// let cfg: SitemapsConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert_eq!(cfg.max_urls, 2000);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("sitemaps"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("SITEMAPS")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
