//! API key resolution.
//!
//! Resolution order:
//! 1. `KIT_API_KEY` environment variable
//! 2. `api.api_key` in the config file (with warning)

use crate::{ConfigError, KitConfig, Result};

/// Environment variable holding the Kit API key.
pub const API_KEY_ENV: &str = "KIT_API_KEY";

/// Result of API key resolution with provenance.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    /// The secret value.
    pub value: String,
    /// Where the secret was found.
    pub source: SecretSource,
}

impl std::fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

/// Where a secret was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Environment variable.
    EnvVar(String),
    /// Config file (plaintext, not recommended).
    ConfigFile,
}

impl std::fmt::Display for SecretSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretSource::EnvVar(var) => write!(f, "env var {}", var),
            SecretSource::ConfigFile => write!(f, "config file (plaintext)"),
        }
    }
}

/// Resolve the API key from the environment, then the config file value.
pub fn resolve_api_key(config_value: Option<&str>) -> Option<ResolvedSecret> {
    resolve_from(std::env::var(API_KEY_ENV).ok(), config_value)
}

/// Resolve the API key for a loaded config, or fail with [`ConfigError::ApiKeyNotFound`].
pub fn require_api_key(config: &KitConfig) -> Result<ResolvedSecret> {
    let secret = resolve_api_key(config.api.api_key.as_deref()).ok_or_else(|| {
        ConfigError::ApiKeyNotFound {
            env_var: API_KEY_ENV.to_string(),
        }
    })?;

    if secret.source == SecretSource::ConfigFile {
        tracing::warn!("using plaintext API key from config file; prefer {}", API_KEY_ENV);
    }
    tracing::debug!(source = %secret.source, "resolved Kit API key");
    Ok(secret)
}

fn resolve_from(env_value: Option<String>, config_value: Option<&str>) -> Option<ResolvedSecret> {
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some(ResolvedSecret {
            value,
            source: SecretSource::EnvVar(API_KEY_ENV.to_string()),
        });
    }

    config_value
        .filter(|v| !v.is_empty())
        .map(|v| ResolvedSecret {
            value: v.to_string(),
            source: SecretSource::ConfigFile,
        })
}
