//! Configuration for the Kit MCP server.
//!
//! Provides TOML-based configuration with:
//! - Config file discovery (`--config`, `KIT_MCP_CONFIG_DIR`, platform config dir)
//! - API key resolution (env var → config file) with provenance
//! - Logging settings for the binary

pub mod discovery;
pub mod error;
pub mod secrets;
pub mod types;

pub use discovery::{
    config_dir, config_path, load_config, load_config_file, load_config_with_options,
    LoadedConfig, CONFIG_DIR_ENV,
};
pub use error::{ConfigError, Result};
pub use secrets::{require_api_key, resolve_api_key, ResolvedSecret, SecretSource, API_KEY_ENV};
pub use types::*;
