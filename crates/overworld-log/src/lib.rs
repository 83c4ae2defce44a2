//! Structured logging for the overworld toolchain.
//!
//! Console output with uptime timestamps and module paths via the `tracing`
//! ecosystem, plus JSON file logging in debug builds for post-mortem
//! analysis. The generation and rendering crates emit no events of their
//! own; only the application layer logs.

use std::path::Path;

use overworld_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Sets up:
/// - Console output with uptime timestamps, module paths, and severity levels
/// - JSON file logging in debug builds (optional)
/// - Environment-based filtering (respects RUST_LOG)
/// - The config system's log_level override
///
/// # Arguments
///
/// * `log_dir` - Optional directory for JSON log files (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration to use for log level override
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    // Base filter: info by default, overridable via RUST_LOG env var
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    // Console layer: human-readable format with timestamps
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // In debug builds, also log to a file for post-mortem analysis
    if debug_build {
        if let Some(log_dir) = log_dir {
            if std::fs::create_dir_all(log_dir).is_ok() {
                if let Ok(log_file) = std::fs::File::create(log_dir.join("overworld.log")) {
                    let file_layer = fmt::layer()
                        .with_writer(log_file)
                        .with_ansi(false)
                        .with_target(true)
                        .with_timer(fmt::time::uptime())
                        .json();

                    subscriber.with(file_layer).init();
                    return;
                }
            }
        }
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string (`info` for all
/// targets). Useful for tests and for consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        let filter_str = format!("{filter}");
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_per_crate_filter_parses() {
        let filter = EnvFilter::new("info,overworld_terrain=debug");
        let filter_str = format!("{filter}");
        assert!(filter_str.contains("overworld_terrain"));
    }
}
