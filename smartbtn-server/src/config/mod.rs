//! Configuration module for smartbtn-server.
//!
//! Handles loading configuration from TOML files and CLI arguments, and
//! validates the locale table before the server accepts any request.

pub mod file;
pub mod runtime;

use crate::config::file::{DefaultsConfig, FileConfig, LocalesConfig};
use crate::config::runtime::{ButtonConfig, ButtonDefaults, ServerConfig, SharedConfig};
use smartbtn_core::locale::{LocaleTable, LocaleTableError};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid locale table: {0}")]
    LocaleError(#[from] LocaleTableError),
}

/// Loaded configuration result containing all parts.
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub defaults: ButtonDefaults,
    pub locales: Arc<LocaleTable>,
}

impl LoadedConfig {
    /// Split into the server section and the button snapshot.
    pub fn into_parts(self) -> (ServerConfig, ButtonConfig) {
        let buttons = ButtonConfig {
            defaults: self.defaults,
            locales: self.locales,
        };
        (self.server, buttons)
    }

    /// Convert into a SharedConfig with Arc<RwLock<T>> wrappers.
    pub fn into_shared(self) -> SharedConfig {
        let (server, buttons) = self.into_parts();
        SharedConfig {
            server: Arc::new(RwLock::new(server)),
            buttons: Arc::new(RwLock::new(Arc::new(buttons))),
        }
    }
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file (a missing file means all defaults)
    /// 2. Apply CLI overrides
    /// 3. Build and validate the locale table
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let mut file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str::<FileConfig>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = ?self.config_path,
                    "Config file not found, using defaults"
                );
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        // Apply CLI overrides
        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        let locales = build_locale_table(file_config.locales)?;
        tracing::info!(
            countries = locales.len(),
            default_country = %locales.default_country(),
            "Locale table ready"
        );

        Ok(LoadedConfig {
            server: ServerConfig {
                listen: file_config.server.listen,
            },
            defaults: convert_defaults(file_config.defaults),
            locales: Arc::new(locales),
        })
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }
}

fn build_locale_table(locales: Option<LocalesConfig>) -> Result<LocaleTable, LocaleTableError> {
    match locales {
        Some(locales) => LocaleTable::new(locales.default_country, locales.languages),
        None => Ok(LocaleTable::builtin()),
    }
}

fn convert_defaults(d: DefaultsConfig) -> ButtonDefaults {
    ButtonDefaults {
        env: d.env,
        currency: d.currency,
        intent: d.intent,
        commit: d.commit,
        vault: d.vault,
    }
}
