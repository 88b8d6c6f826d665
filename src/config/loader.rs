//! Config file loading

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::MedtermError;

/// Default config location: `<config dir>/medterm/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("medterm").join("config.toml"))
}

/// Load configuration from the default location
///
/// A missing file is not an error; defaults apply. A file that exists but
/// does not parse is an error, so typos are not silently ignored.
pub fn load() -> Result<Config, MedtermError> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(finish(Config::default())),
    }
}

/// Load configuration from an explicit path
pub fn load_from(path: &Path) -> Result<Config, MedtermError> {
    let raw = std::fs::read_to_string(path)?;
    let config = toml::from_str(&raw).map_err(|e| MedtermError::Config(e.to_string()))?;
    Ok(finish(config))
}

/// Apply environment fallbacks after parsing
fn finish(mut config: Config) -> Config {
    if config
        .oracle
        .api_key
        .as_deref()
        .is_none_or(|key| key.trim().is_empty())
        && let Ok(key) = std::env::var("ANTHROPIC_API_KEY")
        && !key.trim().is_empty()
    {
        config.oracle.api_key = Some(key);
    }
    config
}
