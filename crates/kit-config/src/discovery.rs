//! Config file discovery.
//!
//! Resolution order (first match wins):
//! 1. Explicit path (`--config`)
//! 2. `$KIT_MCP_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/kit-mcp/config.toml`
//!
//! A missing discovered file means defaults; a missing explicit file is an error.

use std::path::{Path, PathBuf};

use crate::{ConfigError, KitConfig, Result};

/// Default config filename within the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application name for platform directory resolution.
const APP_NAME: &str = "kit-mcp";

/// Environment variable to override the config directory.
pub const CONFIG_DIR_ENV: &str = "KIT_MCP_CONFIG_DIR";

/// Result of config discovery and loading.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The configuration (defaults if nothing was loaded).
    pub config: KitConfig,
    /// Path that was checked, if any could be determined.
    pub path: Option<PathBuf>,
    /// Whether the file was found and loaded.
    pub loaded: bool,
    /// Warnings generated during loading (e.g., plaintext API keys).
    pub warnings: Vec<String>,
}

/// Load configuration from an explicit file, or by discovery.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    load_config_with_options(explicit, None)
}

/// Load configuration with explicit control over the config directory.
///
/// `config_dir` overrides both `KIT_MCP_CONFIG_DIR` and the platform default.
pub fn load_config_with_options(
    explicit: Option<&Path>,
    config_dir_override: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut loaded = match explicit {
        Some(path) => LoadedConfig {
            config: load_config_file(path)?,
            path: Some(path.to_path_buf()),
            loaded: true,
            warnings: Vec::new(),
        },
        None => {
            let path = match config_dir_override {
                Some(dir) => Some(dir.join(CONFIG_FILE)),
                None => config_path(),
            };
            discover(path)
        }
    };

    if loaded.config.has_plaintext_api_key() {
        loaded.warnings.push(format!(
            "API key stored in plaintext in {}; prefer the KIT_API_KEY env var",
            loaded
                .path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        ));
    }

    Ok(loaded)
}

/// Load config from a specific file path (no discovery).
pub fn load_config_file(path: &Path) -> Result<KitConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    KitConfig::from_toml(&contents)
}

/// Get the config file path.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Get the config directory.
///
/// Checks `KIT_MCP_CONFIG_DIR` first, then falls back to the platform default
/// (`~/.config/kit-mcp` on Linux, `~/Library/Application Support/kit-mcp` on macOS).
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

fn discover(path: Option<PathBuf>) -> LoadedConfig {
    let Some(path) = path else {
        return LoadedConfig::default();
    };

    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return LoadedConfig {
            path: Some(path),
            ..Default::default()
        };
    }

    match load_config_file(&path) {
        Ok(config) => LoadedConfig {
            config,
            path: Some(path),
            loaded: true,
            warnings: Vec::new(),
        },
        Err(e) => LoadedConfig {
            warnings: vec![format!("Failed to load {}: {}", path.display(), e)],
            path: Some(path),
            ..Default::default()
        },
    }
}
