//! Process signals: SIGTERM/SIGINT stop the server, SIGHUP re-reads the config file.

use crate::config::ConfigLoader;
use crate::state::AppState;
use std::sync::Arc;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::Notify;

/// Resolves on the first SIGTERM or SIGINT; handed to axum as the graceful
/// shutdown trigger.
pub async fn shutdown_signal() {
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!("SIGTERM received, draining connections");
        }
        _ = sigint.recv() => {
            tracing::info!("SIGINT received, draining connections");
        }
    }
}

/// Start the SIGHUP listener.
///
/// Each SIGHUP re-runs the loader. On success the button snapshot (defaults
/// plus locale table) is replaced in one step; in-flight requests finish with
/// the snapshot they already hold. A file that fails to parse or validate is
/// logged and ignored. A changed listen address is recorded but the socket
/// is not rebound.
///
/// Notify the returned handle to stop the listener task.
pub fn spawn_config_reload_handler(state: AppState, config_loader: Arc<ConfigLoader>) -> Arc<Notify> {
    let stop = Arc::new(Notify::new());
    let stopped = stop.clone();

    tokio::spawn(async move {
        let mut sighup = signal(SignalKind::hangup()).expect("failed to install SIGHUP handler");

        loop {
            tokio::select! {
                _ = sighup.recv() => {
                    match config_loader.reload() {
                        Ok(loaded) => {
                            state.apply(loaded).await;
                            tracing::info!("SIGHUP: button defaults and locale table reloaded");
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "SIGHUP: reload rejected, keeping current config");
                        }
                    }
                }
                _ = stopped.notified() => {
                    tracing::debug!("Reload listener stopped");
                    break;
                }
            }
        }
    });

    stop
}
