//! Logging setup utilities for the Batepapo chat server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for the given crate targets.
///
/// Every target gets the same level, e.g. `batepapo_server=info,batepapo_server_bin=info`.
pub fn default_directive(targets: &[&str], default_log_level: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `targets` - Crate or binary names to enable (e.g., `["batepapo-server", "tower_http"]`)
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use batepapo_shared::logger::setup_logger;
///
/// setup_logger(&["batepapo-server", "tower_http"], "info");
/// ```
pub fn setup_logger(targets: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(targets, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
