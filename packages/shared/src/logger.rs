//! Logging setup utilities for the Matsuri server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The filter covers both the calling package and the binary. It can be
/// overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `package_name` - The package emitting the logs (usually `env!("CARGO_PKG_NAME")`)
/// * `binary_name` - The name of the binary (usually `env!("CARGO_BIN_NAME")`)
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use matsuri_shared::logger::setup_logger;
///
/// setup_logger("matsuri-server", "matsuri-server", "debug");
/// ```
pub fn setup_logger(package_name: &str, binary_name: &str, default_log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(package_name, binary_name, default_log_level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Logger initialized (default level: {})", default_log_level);
}

/// Build the `EnvFilter` directive used when `RUST_LOG` is not set.
///
/// Crate names are normalized to their Rust identifier form (`-` → `_`),
/// and `tower_http` is included so request traces follow the same level.
fn default_filter(package_name: &str, binary_name: &str, default_log_level: &str) -> String {
    let package = package_name.replace('-', "_");
    let binary = binary_name.replace('-', "_");

    if package == binary {
        format!("{package}={default_log_level},tower_http={default_log_level}")
    } else {
        format!(
            "{package}={default_log_level},{binary}={default_log_level},tower_http={default_log_level}"
        )
    }
}
