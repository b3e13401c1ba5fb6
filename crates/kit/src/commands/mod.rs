//! CLI command handlers.

pub mod call;
pub mod serve;
pub mod tools;

use anyhow::Result;
use kit_client::{KitClient, DEFAULT_BASE_URL};
use kit_config::{KitConfig, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose` when `RUST_LOG` is unset.
const VERBOSE_FILTER: &str = "kit=debug,kit_client=debug,kit_mcp=debug,kit_config=debug,info";

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: KitConfig,
    /// Base URL from `--base-url` / `KIT_BASE_URL`.
    pub base_url: Option<String>,
}

impl Context {
    /// Base URL: flag or env var, then config file, then production.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .or(self.config.api.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Build an authenticated client. Fails when no API key can be resolved.
    pub fn client(&self) -> Result<KitClient> {
        let secret = kit_config::require_api_key(&self.config)?;
        let client = KitClient::builder()
            .base_url(self.base_url())
            .api_key(secret.value)
            .build()?;
        tracing::debug!(base_url = %client.base_url(), "Kit client ready");
        Ok(client)
    }
}

/// Install the tracing subscriber: human-readable on stderr, plus a daily
/// JSON file when enabled in config.
///
/// Stdout carries the MCP protocol, so nothing else may write there.
pub fn init_logging(verbose: bool, logging: &LoggingConfig) -> Option<WorkerGuard> {
    use tracing_subscriber::prelude::*;

    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new(VERBOSE_FILTER)
            } else {
                EnvFilter::new(&logging.level)
            }
        })
    };

    let (file_layer, guard) = match logging.log_dir() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "kit-mcp.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter()),
        )
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_config::ApiConfig;

    fn context(flag: Option<&str>, file: Option<&str>) -> Context {
        Context {
            config: KitConfig {
                api: ApiConfig {
                    base_url: file.map(String::from),
                    api_key: None,
                },
                ..Default::default()
            },
            base_url: flag.map(String::from),
        }
    }

    #[test]
    fn test_base_url_precedence() {
        assert_eq!(context(None, None).base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            context(None, Some("http://file")).base_url(),
            "http://file"
        );
        assert_eq!(
            context(Some("http://flag"), Some("http://file")).base_url(),
            "http://flag"
        );
    }
}
