//! Validated runtime configuration shared by request handlers.

use compact_str::CompactString;
use smartbtn_core::locale::LocaleTable;
use smartbtn_core::params::ParamsNormalizer;
use smartbtn_sdk::objects::{Env, Intent};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration with runtime values.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port to listen on.
    pub listen: SocketAddr,
}

/// Fallbacks for button parameters a request does not carry.
#[derive(Debug, Clone)]
pub struct ButtonDefaults {
    pub env: Env,
    pub currency: CompactString,
    pub intent: Intent,
    pub commit: bool,
    pub vault: bool,
}

/// Everything a button request reads, swapped as one unit on reload.
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    pub defaults: ButtonDefaults,
    pub locales: Arc<LocaleTable>,
}

impl ButtonConfig {
    /// A normalizer bound to this snapshot's locale table.
    pub fn normalizer(&self) -> ParamsNormalizer {
        ParamsNormalizer::new(self.locales.clone())
    }
}

/// Shared configuration state with separate locks for each section.
///
/// Defaults and the locale table live in one snapshot, so a request never
/// pairs defaults from one config generation with locales from another.
#[derive(Clone)]
pub struct SharedConfig {
    /// Server configuration (listen address, etc.).
    pub server: Arc<RwLock<ServerConfig>>,
    /// Current button snapshot.
    pub buttons: Arc<RwLock<Arc<ButtonConfig>>>,
}
