//! TOML file configuration structures.
//!
//! These structs directly map to the `smartbtn-config.toml` file format.

use compact_str::CompactString;
use serde::Deserialize;
use smartbtn_sdk::objects::{Country, Env, Intent, Lang};
use std::collections::HashMap;
use std::net::SocketAddr;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Replaces the built-in locale table when present.
    #[serde(default)]
    pub locales: Option<LocalesConfig>,
}

/// Server configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Values used for button parameters the request leaves out.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_env")]
    pub env: Env,
    #[serde(default = "default_currency")]
    pub currency: CompactString,
    #[serde(default = "default_intent")]
    pub intent: Intent,
    #[serde(default = "default_commit")]
    pub commit: bool,
    #[serde(default)]
    pub vault: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            currency: default_currency(),
            intent: default_intent(),
            commit: default_commit(),
            vault: false,
        }
    }
}

fn default_env() -> Env {
    Env::Production
}

fn default_currency() -> CompactString {
    CompactString::from("USD")
}

fn default_intent() -> Intent {
    Intent::Capture
}

fn default_commit() -> bool {
    true
}

/// Locale table section.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalesConfig {
    pub default_country: Country,
    /// Country code to language list; the first language is the default.
    pub languages: HashMap<Country, Vec<Lang>>,
}
