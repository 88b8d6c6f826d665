//! Configuration
//!
//! TOML config loaded from the platform config directory, with every field
//! optional and defaulted. The oracle API key may also come from the
//! `ANTHROPIC_API_KEY` environment variable.

mod loader;
mod types;

pub use loader::{config_path, load, load_from};
pub use types::{Config, OracleConfig, SuggestConfig};
