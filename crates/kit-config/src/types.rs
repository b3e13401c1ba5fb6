//! Configuration types.

use std::path::PathBuf;

use serde::Deserialize;

/// Root configuration, as read from `config.toml`.
///
/// ```toml
/// [api]
/// base_url = "https://api.kit.com/v4"
/// api_key = "kit_..."   # prefer the KIT_API_KEY env var
///
/// [logging]
/// level = "info"
/// file = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Kit API settings.
    pub api: ApiConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

impl KitConfig {
    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> crate::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Whether an API key is stored in the file itself.
    pub fn has_plaintext_api_key(&self) -> bool {
        self.api.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// `[api]` section.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Override of the Kit API base URL.
    pub base_url: Option<String>,
    /// Plaintext API key (fallback when `KIT_API_KEY` is unset).
    pub api_key: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g. "info", "kit_mcp=debug").
    pub level: String,
    /// Also write JSON logs to a daily-rolling file.
    pub file: bool,
    /// Directory for log files; defaults to `<config dir>/logs`.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Where log files go, if file logging is enabled.
    pub fn log_dir(&self) -> Option<PathBuf> {
        if !self.file {
            return None;
        }
        self.directory
            .clone()
            .or_else(|| crate::discovery::config_dir().map(|d| d.join("logs")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = KitConfig::from_toml("").unwrap();
        assert_eq!(config, KitConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file);
        assert!(!config.has_plaintext_api_key());
    }

    #[test]
    fn test_full_config() {
        let config = KitConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8080/v4"
            api_key = "kit_secret"

            [logging]
            level = "debug"
            file = true
            directory = "/var/log/kit-mcp"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:8080/v4"));
        assert!(config.has_plaintext_api_key());
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.log_dir(),
            Some(PathBuf::from("/var/log/kit-mcp"))
        );
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = KitConfig::from_toml("[logging]\nfile = true\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file);
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_log_dir_disabled() {
        let logging = LoggingConfig {
            directory: Some(PathBuf::from("/tmp/logs")),
            ..Default::default()
        };
        assert_eq!(logging.log_dir(), None);
    }

    #[test]
    fn test_invalid_toml() {
        let err = KitConfig::from_toml("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, crate::ConfigError::Parse(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let api = ApiConfig {
            base_url: None,
            api_key: Some("kit_secret".to_string()),
        };
        let debug = format!("{:?}", api);
        assert!(!debug.contains("kit_secret"));
        assert!(debug.contains("REDACTED"));
    }
}
