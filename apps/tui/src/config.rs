use dotenv::dotenv;
use grand_strategy_core::PageVariant;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_THEME_FILE: &str = ".grand-strategy.json";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown page variant {0:?} (expected classic, gradient or neon)")]
    InvalidVariant(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub theme_file: PathBuf,
    pub variant: PageVariant,
    pub log_dir: PathBuf,
    pub debug: bool,
}

/// Resolves the configuration from `.env` and the process environment.
/// CLI flags are applied to the environment before this runs.
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir = env::current_dir()?;
    Ok(config_from_lookup(&base_dir, |key| env::var(key).ok())?)
}

fn config_from_lookup(
    base_dir: &std::path::Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let theme_file = lookup("THEME_FILE").map_or_else(
        || base_dir.join(DEFAULT_THEME_FILE),
        |path| base_dir.join(path),
    );

    let variant = match lookup("PAGE_VARIANT") {
        Some(raw) => PageVariant::parse(&raw).ok_or(ConfigError::InvalidVariant(raw))?,
        None => PageVariant::default(),
    };

    let log_dir = lookup("LOG_DIR").map_or_else(
        || base_dir.join(DEFAULT_LOG_DIR),
        |path| base_dir.join(path),
    );

    let debug = lookup("DEBUG").is_some_and(|value| !matches!(value.trim(), "" | "0" | "false"));

    Ok(AppConfig {
        theme_file,
        variant,
        log_dir,
        debug,
    })
}
