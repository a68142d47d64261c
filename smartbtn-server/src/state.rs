//! Application state shared across all request handlers.

use crate::config::LoadedConfig;
use crate::config::runtime::{ButtonConfig, SharedConfig};
use std::sync::Arc;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration (can be reloaded via SIGHUP).
    pub config: SharedConfig,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    pub fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    /// The button snapshot in effect right now.
    pub async fn buttons(&self) -> Arc<ButtonConfig> {
        self.config.buttons.read().await.clone()
    }

    /// Install a freshly loaded configuration.
    pub async fn apply(&self, loaded: LoadedConfig) {
        let (server, buttons) = loaded.into_parts();
        *self.config.server.write().await = server;
        *self.config.buttons.write().await = Arc::new(buttons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::{ButtonDefaults, ServerConfig};
    use smartbtn_core::locale::LocaleTable;
    use smartbtn_sdk::objects::{Country, Env, Intent, Lang};
    use std::collections::HashMap;

    fn loaded(env: Env, locales: LocaleTable) -> LoadedConfig {
        LoadedConfig {
            server: ServerConfig {
                listen: "127.0.0.1:0".parse().unwrap(),
            },
            defaults: ButtonDefaults {
                env,
                currency: "USD".into(),
                intent: Intent::Capture,
                commit: true,
                vault: false,
            },
            locales: Arc::new(locales),
        }
    }

    #[tokio::test]
    async fn test_reload_swaps_defaults_and_locales_together() {
        let state = AppState::new(loaded(Env::Sandbox, LocaleTable::builtin()).into_shared());
        let before = state.buttons().await;

        let nl_only = LocaleTable::new(
            Country::from("NL"),
            HashMap::from([(Country::from("NL"), vec![Lang::from("nl")])]),
        )
        .unwrap();
        state.apply(loaded(Env::Production, nl_only.clone())).await;
        let after = state.buttons().await;

        // A snapshot taken before the reload stays internally consistent.
        assert_eq!(before.defaults.env, Env::Sandbox);
        assert_eq!(*before.locales, LocaleTable::builtin());

        assert_eq!(after.defaults.env, Env::Production);
        assert_eq!(*after.locales, nl_only);
        assert_eq!(
            after.normalizer().locales().default_country(),
            &Country::from("NL")
        );
    }
}
